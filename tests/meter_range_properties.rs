use meter_bindings::{Document, Meter, NodeId, Result};

fn meter_document(attrs: &[(&str, &str)]) -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let mut with_id = vec![("id", "gauge")];
    with_id.extend_from_slice(attrs);
    let node = doc.create_element(root, "meter", &with_id);
    (doc, node)
}

#[test]
fn no_attributes_resolve_to_literal_and_chained_defaults() -> Result<()> {
    let (doc, _) = meter_document(&[]);
    let meter = Meter::bind(&doc, "gauge")?;

    assert_eq!(meter.value(&doc), 0.0);
    assert_eq!(meter.min(&doc), 0.0);
    assert_eq!(meter.max(&doc), 1.0);
    assert_eq!(meter.low(&doc), 0.0);
    assert_eq!(meter.high(&doc), 1.0);
    assert_eq!(meter.optimum(&doc), 0.0);
    Ok(())
}

#[test]
fn low_and_high_fall_back_to_non_default_min_and_max() -> Result<()> {
    let (doc, _) = meter_document(&[("min", "2"), ("max", "10")]);
    let meter = Meter::bind(&doc, "gauge")?;

    assert_eq!(meter.low(&doc), 2.0);
    assert_eq!(meter.high(&doc), 10.0);
    assert_eq!(meter.optimum(&doc), 0.0);
    assert_eq!(meter.value(&doc), 0.0);
    Ok(())
}

#[test]
fn optimum_falls_back_to_resolved_value() -> Result<()> {
    let (doc, _) = meter_document(&[("value", "5"), ("low", "3"), ("high", "8")]);
    let meter = Meter::bind(&doc, "gauge")?;

    assert_eq!(meter.value(&doc), 5.0);
    assert_eq!(meter.low(&doc), 3.0);
    assert_eq!(meter.high(&doc), 8.0);
    assert_eq!(meter.optimum(&doc), 5.0);
    Ok(())
}

#[test]
fn unparsable_low_resolves_like_absent_low() -> Result<()> {
    let (doc, _) = meter_document(&[("min", "7"), ("low", "not-a-number")]);
    let meter = Meter::bind(&doc, "gauge")?;

    assert_eq!(meter.low(&doc), meter.min(&doc));
    assert_eq!(meter.low(&doc), 7.0);
    Ok(())
}

#[test]
fn adversarial_attribute_text_never_produces_a_non_finite_result() -> Result<()> {
    let tokens = [
        "", " ", "\t\n", "abc", "Infinity", "-Infinity", "NaN", "nan", "1e999999",
        "-1e999999", "1.2.3", "--5", "0x1f", "five",
    ];
    for token in tokens {
        let (doc, _) = meter_document(&[
            ("value", token),
            ("min", token),
            ("max", token),
            ("low", token),
            ("high", token),
            ("optimum", token),
        ]);
        let meter = Meter::bind(&doc, "gauge")?;
        assert_eq!(meter.value(&doc), 0.0, "value for {token:?}");
        assert_eq!(meter.min(&doc), 0.0, "min for {token:?}");
        assert_eq!(meter.max(&doc), 1.0, "max for {token:?}");
        assert_eq!(meter.low(&doc), 0.0, "low for {token:?}");
        assert_eq!(meter.high(&doc), 1.0, "high for {token:?}");
        assert_eq!(meter.optimum(&doc), 0.0, "optimum for {token:?}");
    }
    Ok(())
}

#[test]
fn out_of_range_values_are_reported_without_clamping() -> Result<()> {
    let (doc, _) = meter_document(&[
        ("value", "-20"),
        ("min", "0"),
        ("max", "10"),
        ("low", "9"),
        ("high", "2"),
    ]);
    let meter = Meter::bind(&doc, "gauge")?;

    assert_eq!(meter.value(&doc), -20.0);
    assert_eq!(meter.low(&doc), 9.0);
    assert_eq!(meter.high(&doc), 2.0);
    Ok(())
}

#[test]
fn accessors_reflect_attribute_mutation_between_reads() -> Result<()> {
    let (mut doc, node) = meter_document(&[("value", "50"), ("max", "100")]);
    let meter = Meter::bind(&doc, "gauge")?;
    assert_eq!(meter.value(&doc), 50.0);
    assert_eq!(meter.optimum(&doc), 50.0);

    doc.set_attr(node, "value", "84");
    doc.set_attr(node, "min", "10");
    doc.set_attr(node, "optimum", "95");
    assert_eq!(meter.value(&doc), 84.0);
    assert_eq!(meter.min(&doc), 10.0);
    assert_eq!(meter.low(&doc), 10.0);
    assert_eq!(meter.optimum(&doc), 95.0);

    doc.remove_attr(node, "value");
    assert_eq!(meter.value(&doc), 0.0);
    assert_eq!(meter.optimum(&doc), 95.0);
    Ok(())
}
