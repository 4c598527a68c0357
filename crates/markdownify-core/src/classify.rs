//! Element classification for the renderer.
//!
//! Tag dispatch is a closed [`ElementKind`] match: every recognized tag has
//! an explicit variant and unknown tags fall through to
//! [`ElementKind::Unrecognized`] predictably.

use crate::node::Node;

/// The closed set of element shapes the renderer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<br>`, rendered as a single newline
    LineBreak,
    /// `<a>`, rendered as `[text](href)` when an `href` is present
    Anchor,
    /// Two-character `h?` tag other than `hr`. Carries the parsed level;
    /// `None` when the second character is not a digit.
    Heading(Option<u8>),
    /// `<blockquote>`
    Quote,
    /// `<ul>`. Ordered lists are not recognized as lists.
    List,
    /// `<li>`
    ListItem,
    /// `<p>`
    Paragraph,
    /// `<div>`
    Division,
    /// Any other tag, rendered as a plain container
    Unrecognized,
}

/// Classify a tag name.
pub fn classify(tag: &str) -> ElementKind {
    match tag {
        "br" => ElementKind::LineBreak,
        "a" => ElementKind::Anchor,
        "blockquote" => ElementKind::Quote,
        "ul" => ElementKind::List,
        "li" => ElementKind::ListItem,
        "p" => ElementKind::Paragraph,
        "div" => ElementKind::Division,
        // Heading heuristic: exactly two characters, the first `h`, the
        // second not `r` (so `h1`..`h9` match and `hr` does not). A non-digit
        // second character still classifies as a heading, with no level.
        t if t.len() == 2 && t.starts_with('h') && !t.ends_with('r') => {
            ElementKind::Heading(t[1..].parse().ok())
        }
        _ => ElementKind::Unrecognized,
    }
}

impl ElementKind {
    /// Whether Markdown separates this kind from its neighbors with a blank
    /// line. List items are not blocks; they carry their own single-newline
    /// terminator.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            ElementKind::Division
                | ElementKind::Paragraph
                | ElementKind::Heading(_)
                | ElementKind::Quote
                | ElementKind::List
        )
    }
}

/// Classify an element node; text nodes are `Unrecognized`.
pub fn classify_node(node: &Node) -> ElementKind {
    if node.is_element() {
        classify(node.tag_name())
    } else {
        ElementKind::Unrecognized
    }
}

/// True iff the node is an element Markdown separates from its neighbors
/// with a blank line: `div`, `p`, a heading, `blockquote`, or `ul`.
pub fn is_block(node: Option<&Node>) -> bool {
    node.is_some_and(|n| n.is_element() && classify(n.tag_name()).is_block())
}

pub fn is_header(node: Option<&Node>) -> bool {
    matches_kind(node, |kind| matches!(kind, ElementKind::Heading(_)))
}

pub fn is_quote(node: Option<&Node>) -> bool {
    matches_kind(node, |kind| kind == ElementKind::Quote)
}

pub fn is_list(node: Option<&Node>) -> bool {
    matches_kind(node, |kind| kind == ElementKind::List)
}

pub fn is_paragraph(node: Option<&Node>) -> bool {
    matches_kind(node, |kind| kind == ElementKind::Paragraph)
}

pub fn is_list_item(node: Option<&Node>) -> bool {
    matches_kind(node, |kind| kind == ElementKind::ListItem)
}

fn matches_kind(node: Option<&Node>, predicate: impl Fn(ElementKind) -> bool) -> bool {
    node.is_some_and(|n| n.is_element() && predicate(classify(n.tag_name())))
}

/// The `#` run for a heading level. An unparsable level yields an empty
/// marker; the renderer still writes the following space.
pub fn heading_marker(level: Option<u8>) -> String {
    "#".repeat(usize::from(level.unwrap_or(0)))
}

/// How a text node sits relative to its block-level neighbors.
///
/// "After" also covers a missing next sibling and a following list item;
/// "before" also covers a preceding list item. Both situations end the
/// inline run, so the text node's fringe whitespace on that side is
/// trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAdjacency {
    Neither,
    Before,
    After,
    Both,
}

impl BlockAdjacency {
    /// A block boundary precedes this node.
    pub fn block_before(self) -> bool {
        matches!(self, BlockAdjacency::Before | BlockAdjacency::Both)
    }

    /// A block boundary follows this node.
    pub fn block_after(self) -> bool {
        matches!(self, BlockAdjacency::After | BlockAdjacency::Both)
    }
}

/// Classify the block adjacency of a node given its siblings.
pub fn block_adjacency(prev: Option<&Node>, next: Option<&Node>) -> BlockAdjacency {
    let before = is_block(prev) || is_list_item(prev);
    let after = next.is_none() || is_block(next) || is_list_item(next);

    match (before, after) {
        (true, true) => BlockAdjacency::Both,
        (true, false) => BlockAdjacency::Before,
        (false, true) => BlockAdjacency::After,
        (false, false) => BlockAdjacency::Neither,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_recognized_tags() {
        assert_eq!(classify("br"), ElementKind::LineBreak);
        assert_eq!(classify("a"), ElementKind::Anchor);
        assert_eq!(classify("blockquote"), ElementKind::Quote);
        assert_eq!(classify("ul"), ElementKind::List);
        assert_eq!(classify("li"), ElementKind::ListItem);
        assert_eq!(classify("p"), ElementKind::Paragraph);
        assert_eq!(classify("div"), ElementKind::Division);
        assert_eq!(classify("span"), ElementKind::Unrecognized);
        assert_eq!(classify("table"), ElementKind::Unrecognized);
    }

    #[test]
    fn test_classify_headings() {
        assert_eq!(classify("h1"), ElementKind::Heading(Some(1)));
        assert_eq!(classify("h3"), ElementKind::Heading(Some(3)));
        assert_eq!(classify("h9"), ElementKind::Heading(Some(9)));
        // hr is excluded by the second-character check
        assert_eq!(classify("hr"), ElementKind::Unrecognized);
        // two-character h-tags with a non-digit suffix still classify as
        // headings, with no parsable level
        assert_eq!(classify("hx"), ElementKind::Heading(None));
        // longer tags never match the heuristic
        assert_eq!(classify("h10"), ElementKind::Unrecognized);
        assert_eq!(classify("header"), ElementKind::Unrecognized);
    }

    #[test]
    fn test_ordered_lists_are_not_lists() {
        assert_eq!(classify("ol"), ElementKind::Unrecognized);
        assert!(!is_list(Some(&Node::element("ol"))));
    }

    #[test]
    fn test_predicates_are_null_safe() {
        assert!(!is_block(None));
        assert!(!is_header(None));
        assert!(!is_quote(None));
        assert!(!is_list(None));
        assert!(!is_paragraph(None));
        assert!(!is_list_item(None));
    }

    #[test]
    fn test_predicates_ignore_text_nodes() {
        // A text node whose content happens to spell a tag name is not an
        // element and never matches
        let text = Node::text("p");
        assert!(!is_block(Some(&text)));
        assert!(!is_paragraph(Some(&text)));
    }

    #[test]
    fn test_is_block() {
        assert!(is_block(Some(&Node::element("div"))));
        assert!(is_block(Some(&Node::element("p"))));
        assert!(is_block(Some(&Node::element("h2"))));
        assert!(is_block(Some(&Node::element("blockquote"))));
        assert!(is_block(Some(&Node::element("ul"))));
        assert!(!is_block(Some(&Node::element("li"))));
        assert!(!is_block(Some(&Node::element("span"))));
        assert!(!is_block(Some(&Node::element("a"))));
    }

    #[test]
    fn test_heading_marker() {
        assert_eq!(heading_marker(Some(1)), "#");
        assert_eq!(heading_marker(Some(4)), "####");
        assert_eq!(heading_marker(None), "");
    }

    #[test]
    fn test_block_adjacency() {
        let p = Node::element("p");
        let span = Node::element("span");
        let li = Node::element("li");

        assert_eq!(
            block_adjacency(Some(&span), Some(&span)),
            BlockAdjacency::Neither
        );
        assert_eq!(
            block_adjacency(Some(&p), Some(&span)),
            BlockAdjacency::Before
        );
        assert_eq!(block_adjacency(Some(&span), Some(&p)), BlockAdjacency::After);
        assert_eq!(block_adjacency(Some(&p), Some(&p)), BlockAdjacency::Both);
        // the end of the sibling run counts as a boundary after
        assert_eq!(block_adjacency(None, None), BlockAdjacency::After);
        // list items are boundaries on both sides even though they are not
        // blocks
        assert_eq!(block_adjacency(Some(&li), Some(&li)), BlockAdjacency::Both);
    }
}
