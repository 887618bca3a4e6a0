use std::collections::HashMap;

use crate::dom::Element;

pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for Element {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: AttributeSource + ?Sized> AttributeSource for &S {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

// Strict float-literal scan for attribute text: optional sign, digits with an
// optional fraction, optional exponent with mandatory digits. The whole string
// must match after trimming ASCII whitespace, so `Infinity`, `NaN`, hex and
// trailing junk are all rejected. Literals that overflow to a non-finite f64
// are rejected too.
pub fn parse_float_attribute(raw: &str) -> Option<f64> {
    let src = raw.trim_matches(|ch: char| ch.is_ascii_whitespace());
    if src.is_empty() {
        return None;
    }

    let bytes = src.as_bytes();
    let mut i = 0usize;

    if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut int_digits = 0usize;
    while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
        int_digits += 1;
        i += 1;
    }

    let mut frac_digits = 0usize;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
            frac_digits += 1;
            i += 1;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }

        let mut exp_digits = 0usize;
        while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
            exp_digits += 1;
            i += 1;
        }

        if exp_digits == 0 {
            return None;
        }
    }

    if i != bytes.len() {
        return None;
    }

    src.parse::<f64>().ok().filter(|value| value.is_finite())
}

// Read-through view over one attribute source. Holds no parsed state: every
// accessor re-reads and re-parses, so attribute mutation between calls is
// always visible. Absent and unparsable attributes take the same fallback:
// `value`, `min` and `max` have literal defaults, while `low`, `high` and
// `optimum` chain to the resolved `min`, `max` and `value` respectively.
// Nothing is clamped and no accessor can fail.
#[derive(Debug, Clone, Copy)]
pub struct RangeProps<S> {
    source: S,
}

impl<S: AttributeSource> RangeProps<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn parsed(&self, name: &str) -> Option<f64> {
        self.source.attribute(name).and_then(parse_float_attribute)
    }

    pub fn value(&self) -> f64 {
        self.parsed("value").unwrap_or(0.0)
    }

    pub fn min(&self) -> f64 {
        self.parsed("min").unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.parsed("max").unwrap_or(1.0)
    }

    pub fn low(&self) -> f64 {
        self.parsed("low").unwrap_or_else(|| self.min())
    }

    pub fn high(&self) -> f64 {
        self.parsed("high").unwrap_or_else(|| self.max())
    }

    pub fn optimum(&self) -> f64 {
        self.parsed("optimum").unwrap_or_else(|| self.value())
    }
}
