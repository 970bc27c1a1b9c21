//! Tree nodes - the generic input to translation.
//!
//! Nodes are produced upstream (by whatever component or template model the
//! host uses) and are read-only here.

use std::collections::BTreeMap;
use std::fmt;

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element => f.write_str("element"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// A generic UI tree node.
///
/// ```
/// use spark_flex::pipeline::TreeNode;
///
/// let node = TreeNode::element()
///     .attr("class", "flexbox")
///     .attr("data-gap", "1")
///     .child(TreeNode::text("left"))
///     .child(TreeNode::text("right"));
///
/// assert_eq!(node.class(), Some("flexbox"));
/// assert_eq!(node.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    kind: NodeKind,
    attributes: BTreeMap<String, String>,
    children: Vec<TreeNode>,
    text: String,
}

impl TreeNode {
    /// An element node with no attributes or children.
    pub fn element() -> Self {
        Self {
            kind: NodeKind::Element,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// A text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: content.into(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// The `class` attribute.
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Text content. Empty for element nodes.
    pub fn content(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let node = TreeNode::element()
            .attr("class", "flexbox")
            .attr("data-direction", "column")
            .with_children([TreeNode::text("a"), TreeNode::text("b")]);

        assert_eq!(node.kind(), NodeKind::Element);
        assert_eq!(node.class(), Some("flexbox"));
        assert_eq!(node.get_attr("data-direction"), Some("column"));
        assert_eq!(node.get_attr("data-wrap"), None);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.content(), "");
    }

    #[test]
    fn test_text_node() {
        let node = TreeNode::text("hello");
        assert_eq!(node.kind(), NodeKind::Text);
        assert_eq!(node.content(), "hello");
        assert!(node.children().is_empty());
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Element.to_string(), "element");
        assert_eq!(NodeKind::Text.to_string(), "text");
    }
}
