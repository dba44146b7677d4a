//! Document snapshot model
//!
//! Minimal DOM tree as delivered by a page-inspection channel. Gatherers
//! traverse it breadth-first, so sibling order is document order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// DOM node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Document,
    Element,
    Text,
    Comment,
    Other,
}

/// One node of a document snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomNode {
    pub node_id: u64,
    pub node_type: NodeType,
    /// Uppercase node name, e.g. `BODY`, or `#text` for text nodes.
    pub node_name: String,
    /// Text content for text nodes, empty otherwise.
    pub node_value: String,
    /// Lowercase element name, empty for non-elements.
    pub local_name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DomNode>,
}

impl DomNode {
    pub fn document(node_id: u64) -> Self {
        Self {
            node_id,
            node_type: NodeType::Document,
            node_name: "#document".to_string(),
            node_value: String::new(),
            local_name: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn element(node_id: u64, local_name: &str) -> Self {
        Self {
            node_id,
            node_type: NodeType::Element,
            node_name: local_name.to_ascii_uppercase(),
            node_value: String::new(),
            local_name: local_name.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(node_id: u64, value: &str) -> Self {
        Self {
            node_id,
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: value.to_string(),
            local_name: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// True for text nodes with non-whitespace content.
    pub fn is_nonempty_text(&self) -> bool {
        self.node_type == NodeType::Text && !self.node_value.trim().is_empty()
    }

    /// Breadth-first search for the `<body>` element under this node.
    pub fn find_body(&self) -> Option<&DomNode> {
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            if node.node_name.eq_ignore_ascii_case("body") {
                return Some(node);
            }
            queue.extend(node.children.iter());
        }
        None
    }

    /// All text nodes under this node paired with their parent element, in
    /// breadth-first document order. Whitespace-only nodes are included;
    /// callers filter with [`DomNode::is_nonempty_text`].
    pub fn text_nodes_with_parents(&self) -> Vec<(&DomNode, &DomNode)> {
        let mut pairs = Vec::new();
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            for child in &node.children {
                if child.node_type == NodeType::Text {
                    pairs.push((child, node));
                } else {
                    queue.push_back(child);
                }
            }
        }
        pairs
    }
}
