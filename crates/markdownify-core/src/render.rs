//! Recursive node-to-Markdown rendering.
//!
//! Each node renders to an immutable string fragment; parents concatenate
//! their children's fragments in document order. Sibling context travels as
//! a pair of `Option<&Node>` neighbors and the ambient indentation string is
//! threaded through the recursion, so there is no shared output buffer and
//! no mutation of the input tree.
//!
//! Known limitation: `<pre>` content is collapsed like any other text, so
//! internal formatting inside preformatted elements is lost.

use crate::classify::{block_adjacency, classify_node, heading_marker, is_block, ElementKind};
use crate::node::Node;
use crate::text::{collapse_whitespace, indent_lines, squeeze_blank_lines};

/// Render a parsed subtree to Markdown.
///
/// Renders the node as if it had no siblings, then applies the final
/// whitespace pass: outer trim plus capping consecutive newlines at 2.
/// Pure with respect to the tree; rendering the same tree twice yields
/// identical output.
pub fn render(node: &Node) -> String {
    squeeze_blank_lines(&render_node(node, None, None, ""))
}

/// Render one node given its siblings and the ambient indentation.
fn render_node(node: &Node, prev: Option<&Node>, next: Option<&Node>, indent: &str) -> String {
    if node.is_text() {
        return render_text(node, prev, next);
    }

    let kind = classify_node(node);

    if kind == ElementKind::LineBreak {
        return "\n".to_string();
    }

    let children = node.children();
    if children.is_empty() {
        return String::new();
    }

    if kind == ElementKind::Anchor {
        return render_anchor(node, indent);
    }

    let mut content = String::new();
    if let ElementKind::Heading(level) = kind {
        content.push_str(&heading_marker(level));
        content.push(' ');
    }

    for (i, child) in children.iter().enumerate() {
        let child_prev = i.checked_sub(1).and_then(|p| children.get(p));
        let child_next = children.get(i + 1);
        content.push_str(&render_node(child, child_prev, child_next, indent));
    }

    // Quote formatting supersedes the generic block suffix
    if kind == ElementKind::Quote {
        return render_quote(&content);
    }

    if kind.is_block() {
        content.push_str("\n\n");
    }

    match kind {
        ElementKind::ListItem => {
            format!("* {}\n", indent_lines(&content, "  ").trim())
        }
        // The trim here removes the block suffix just appended; a list
        // carries no trailing separator of its own.
        ElementKind::List => indent_lines(content.trim(), indent),
        _ => indent_lines(&content, indent),
    }
}

/// Text nodes: collapse whitespace, then trim the fringe that touches a
/// block boundary. The order is significant: trailing trim, then the
/// blank-line separator when a block follows, then leading trim.
fn render_text(node: &Node, prev: Option<&Node>, next: Option<&Node>) -> String {
    let adjacency = block_adjacency(prev, next);
    let collapsed = collapse_whitespace(node.text_content());

    let mut text = if adjacency.block_after() {
        collapsed.trim_end().to_string()
    } else {
        collapsed
    };

    if is_block(next) {
        text.push_str("\n\n");
    }

    if adjacency.block_before() {
        text = text.trim_start().to_string();
    }

    text
}

/// Anchors take their link text from the first child only.
fn render_anchor(node: &Node, indent: &str) -> String {
    let children = node.children();
    let text = render_node(&children[0], None, children.get(1), indent);

    let Some(href) = node.attr("href") else {
        // no link target: degrade to a plain inline span
        return text;
    };

    if text.trim().is_empty() {
        // an empty or image-only anchor preserves inter-word spacing
        // instead of emitting a broken link
        return " ".to_string();
    }

    format!("[{}]({})", text, href)
}

/// Quotes: trim, prefix every line (`"> "` when the trimmed line has
/// content, bare `">"` otherwise), rejoin, and close with a blank line.
fn render_quote(content: &str) -> String {
    let quoted = content
        .trim()
        .split('\n')
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n", quoted)
}
