//! DOM-like node structure for HTML to Markdown rendering.
//!
//! The renderer is parser-agnostic: any HTML parser can convert its output
//! into this structure. Children are owned in document order; there are no
//! parent or sibling pointers, so the tree is finite and acyclic by
//! construction. Sibling context is supplied positionally during traversal.

/// Node kinds recognized by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element node with a tag name, attributes, and children
    Element,
    /// Text node carrying raw character data
    Text,
}

/// A node in a parsed HTML document tree.
///
/// The tree is read-only during rendering; the renderer borrows it and
/// never mutates, creates, or deletes nodes.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,

    /// Tag name, ASCII-lowercased at construction ("#text" for text nodes,
    /// "#fragment" for fragment containers)
    tag: String,

    /// Character data for text nodes
    text: String,

    /// Attributes in document order; duplicate names are permitted and
    /// lookup returns the first match
    attributes: Vec<(String, String)>,

    children: Vec<Node>,
}

impl Node {
    /// Create a new element node.
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_ascii_lowercase(),
            text: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes.
    pub fn element_with_attrs(tag: &str, attrs: &[(&str, &str)]) -> Self {
        let mut node = Self::element(tag);
        node.attributes = attrs
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
            .collect();
        node
    }

    /// Create a new text node.
    pub fn text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: "#text".to_string(),
            text: content.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a fragment container: a tagless element that renders as the
    /// plain concatenation of its children. Useful for rendering a sequence
    /// of sibling nodes that has no real parent element.
    pub fn fragment() -> Self {
        Self {
            kind: NodeKind::Element,
            tag: "#fragment".to_string(),
            text: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Get the tag name (lowercase). Meaningful only for element nodes.
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Get the raw character data. Meaningful only for text nodes.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// Look up an attribute value by name (lowercase). Scans the attribute
    /// list in document order; the first matching name wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if an attribute exists.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            &[("href", "https://example.com"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
        assert!(node.has_attr("href"));
        assert!(!node.has_attr("id"));
    }

    #[test]
    fn test_duplicate_attribute_first_match_wins() {
        let node = Node::element_with_attrs("a", &[("href", "first"), ("href", "second")]);
        assert_eq!(node.attr("href"), Some("first"));
    }

    #[test]
    fn test_children_in_document_order() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().len(), 3);
        assert!(parent.children()[0].is_text());
        assert!(parent.children()[1].is_element());
    }

    #[test]
    fn test_fragment_is_tagless_container() {
        let mut fragment = Node::fragment();
        fragment.add_child(Node::text("a"));
        assert!(fragment.is_element());
        assert_eq!(fragment.tag_name(), "#fragment");
    }
}
