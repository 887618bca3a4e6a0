use std::sync::{Arc, OnceLock};

use crate::dom::{Document, NodeId};
use crate::range::{AttributeSource, RangeProps, parse_float_attribute};
use crate::{Error, Result};

// Live collection: the node set is recomputed from the document on every
// read, but the list object itself stays identity-stable for its owner.
#[derive(Debug)]
pub struct LabelsList {
    owner: NodeId,
}

impl LabelsList {
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    pub fn nodes(&self, doc: &Document) -> Vec<NodeId> {
        doc.labels_for(self.owner)
    }

    pub fn len(&self, doc: &Document) -> usize {
        self.nodes(doc).len()
    }

    pub fn is_empty(&self, doc: &Document) -> bool {
        self.nodes(doc).is_empty()
    }

    pub fn item(&self, doc: &Document, index: usize) -> Option<NodeId> {
        self.nodes(doc).get(index).copied()
    }
}

struct NodeAttrs<'a> {
    doc: &'a Document,
    node: NodeId,
}

impl AttributeSource for NodeAttrs<'_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.doc.attr(self.node, name)
    }
}

fn bind_tagged(doc: &Document, id: &str, expected: &str) -> Result<NodeId> {
    let node = doc
        .by_id(id)
        .ok_or_else(|| Error::ElementNotFound(id.to_string()))?;
    let actual = doc.tag_name(node).unwrap_or_default();
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(Error::TagMismatch {
            id: id.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(node)
}

#[derive(Debug)]
pub struct Meter {
    node: NodeId,
    labels: OnceLock<Arc<LabelsList>>,
}

impl Meter {
    pub fn bind(doc: &Document, id: &str) -> Result<Self> {
        let node = bind_tagged(doc, id, "meter")?;
        Ok(Self {
            node,
            labels: OnceLock::new(),
        })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    fn props<'a>(&self, doc: &'a Document) -> RangeProps<NodeAttrs<'a>> {
        RangeProps::new(NodeAttrs {
            doc,
            node: self.node,
        })
    }

    pub fn value(&self, doc: &Document) -> f64 {
        self.props(doc).value()
    }

    pub fn min(&self, doc: &Document) -> f64 {
        self.props(doc).min()
    }

    pub fn max(&self, doc: &Document) -> f64 {
        self.props(doc).max()
    }

    pub fn low(&self, doc: &Document) -> f64 {
        self.props(doc).low()
    }

    pub fn high(&self, doc: &Document) -> f64 {
        self.props(doc).high()
    }

    pub fn optimum(&self, doc: &Document) -> f64 {
        self.props(doc).optimum()
    }

    // Has to hand out one shared instance so equality (==) on repeated reads
    // holds; the first caller wins and the Arc is reused ever after.
    pub fn labels(&self) -> Arc<LabelsList> {
        Arc::clone(
            self.labels
                .get_or_init(|| Arc::new(LabelsList { owner: self.node })),
        )
    }
}

#[derive(Debug)]
pub struct Progress {
    node: NodeId,
    labels: OnceLock<Arc<LabelsList>>,
}

impl Progress {
    pub fn bind(doc: &Document, id: &str) -> Result<Self> {
        let node = bind_tagged(doc, id, "progress")?;
        Ok(Self {
            node,
            labels: OnceLock::new(),
        })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    fn props<'a>(&self, doc: &'a Document) -> RangeProps<NodeAttrs<'a>> {
        RangeProps::new(NodeAttrs {
            doc,
            node: self.node,
        })
    }

    pub fn value(&self, doc: &Document) -> f64 {
        self.props(doc).value()
    }

    pub fn max(&self, doc: &Document) -> f64 {
        self.props(doc).max()
    }

    pub fn indeterminate(&self, doc: &Document) -> bool {
        doc.attr(self.node, "value")
            .and_then(parse_float_attribute)
            .is_none()
    }

    pub fn labels(&self) -> Arc<LabelsList> {
        Arc::clone(
            self.labels
                .get_or_init(|| Arc::new(LabelsList { owner: self.node })),
        )
    }
}
