use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: HashMap<String, String>,
}

impl Element {
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn create_node(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    pub fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: &str,
        attrs: &[(&str, &str)],
    ) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        let element = Element {
            tag_name: tag_name.to_string(),
            attrs,
        };
        let id = self.create_node(Some(parent), NodeType::Element(element));
        let id_attr = self
            .element(id)
            .and_then(|element| element.attrs.get("id").cloned());
        if let Some(id_attr) = id_attr {
            // first element in tree order wins, as with getElementById
            self.id_index.entry(id_attr).or_insert(id);
        }
        id
    }

    pub fn create_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.create_node(Some(parent), NodeType::Text(text.to_string()))
    }

    pub fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes[node_id.0].node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node_id.0].node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|element| element.tag_name.as_str())
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes[node_id.0].parent
    }

    pub fn attr(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.element(node_id).and_then(|element| element.attribute(name))
    }

    pub fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        element.attrs.insert(name.to_string(), value.to_string());
        if name == "id" {
            self.reindex_ids();
        }
    }

    pub fn remove_attr(&mut self, node_id: NodeId, name: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        element.attrs.remove(name);
        if name == "id" {
            self.reindex_ids();
        }
    }

    fn reindex_ids(&mut self) {
        self.id_index.clear();
        for node in self.tree_order() {
            let id_attr = self
                .element(node)
                .and_then(|element| element.attrs.get("id").cloned());
            if let Some(id_attr) = id_attr {
                self.id_index.entry(id_attr).or_insert(node);
            }
        }
    }

    pub fn text_content(&self, node_id: NodeId) -> String {
        match &self.nodes[node_id.0].node_type {
            NodeType::Document | NodeType::Element(_) => {
                let mut out = String::new();
                for child in &self.nodes[node_id.0].children {
                    out.push_str(&self.text_content(*child));
                }
                out
            }
            NodeType::Text(text) => text.clone(),
        }
    }

    pub(crate) fn tree_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            for child in self.nodes[node.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    // Labels associated with a control, in tree order: a label with a `for`
    // attribute labels the element that id names; a label without one labels
    // the controls nested inside it.
    pub(crate) fn labels_for(&self, control: NodeId) -> Vec<NodeId> {
        let control_id = self.attr(control, "id").map(str::to_string);
        let mut out = Vec::new();
        for node in self.tree_order() {
            let Some(element) = self.element(node) else {
                continue;
            };
            if !element.tag_name.eq_ignore_ascii_case("label") {
                continue;
            }
            let labels_control = match element.attribute("for") {
                Some(for_attr) => control_id.as_deref() == Some(for_attr),
                None => self.is_ancestor(node, control),
            };
            if labels_control {
                out.push(node);
            }
        }
        out
    }

    fn is_ancestor(&self, candidate: NodeId, node_id: NodeId) -> bool {
        let mut current = self.nodes[node_id.0].parent;
        while let Some(parent) = current {
            if parent == candidate {
                return true;
            }
            current = self.nodes[parent.0].parent;
        }
        false
    }
}
