//! HTML parsing support.
//!
//! Parses HTML strings with scraper/html5ever and converts the resulting
//! tree into the parser-agnostic [`Node`] structure consumed by the
//! renderer.

use scraper::{ElementRef, Html, Node as ScraperNode};

use markdownify_core::Node;

/// Parse an HTML document into a [`Node`] tree.
///
/// html5ever is lenient: malformed markup is repaired rather than
/// rejected, so this function is total. The returned root is the `html`
/// element (synthesized when the input does not provide one).
///
/// # Example
///
/// ```rust
/// use markdownify::{parse_html, render};
///
/// let tree = parse_html("<p>Hello <a href=\"https://example.com\">there</a></p>");
/// assert_eq!(render(&tree), "Hello [there](https://example.com)");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper element into the renderer's node structure.
///
/// Comments, doctypes, and processing instructions are dropped; only
/// elements and text survive.
fn scraper_to_node(element: ElementRef) -> Node {
    let value = element.value();

    let attrs: Vec<(&str, &str)> = value.attrs().collect();
    let mut node = if attrs.is_empty() {
        Node::element(value.name())
    } else {
        Node::element_with_attrs(value.name(), &attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
