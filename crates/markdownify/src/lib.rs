//! # markdownify
//!
//! Convert HTML documents to Markdown text.
//!
//! The conversion is a pure, deterministic tree-to-text transform: HTML is
//! parsed into a node tree (by scraper/html5ever), then a recursive
//! renderer turns the tree into Markdown, normalizing whitespace so blocks
//! are separated by exactly one blank line and the result carries no
//! fringe whitespace.
//!
//! Headers, links, paragraphs, block quotes, unordered lists, and line
//! breaks are rendered with Markdown syntax; other elements contribute
//! their text content. Known limitations: ordered lists are treated as
//! plain containers, and `<pre>` content has its whitespace collapsed
//! like any other text.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let markdown = markdownify::convert(
//!     "<h1>Title</h1><p>See <a href=\"https://example.com\">the docs</a>.</p>",
//! );
//! assert_eq!(markdown, "# Title\n\nSee [the docs](https://example.com).");
//! ```
//!
//! ## Example (pre-parsed tree)
//!
//! The renderer itself is parser-agnostic. Trees can be built by hand (or
//! by another parser) and rendered directly through the re-exported
//! [`render`] entry point:
//!
//! ```rust
//! use markdownify::{render, Node};
//!
//! let mut quote = Node::element("blockquote");
//! quote.add_child(Node::text("Stay hungry."));
//!
//! assert_eq!(render(&quote), "> Stay hungry.");
//! ```

#[cfg(feature = "html")]
mod convert;
#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "html")]
pub use convert::{convert, convert_reader};
#[cfg(feature = "html")]
pub use html::parse_html;

pub use markdownify_core::{
    block_adjacency, classify, is_block, is_header, is_list, is_list_item, is_paragraph,
    is_quote, render, BlockAdjacency, ElementKind, Node, NodeKind,
};

/// Error type for conversion operations.
///
/// Rendering itself is total; the only failures are upstream of it, in
/// reading and decoding the input byte stream.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownifyError {
    #[error("failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),

    #[error("HTML input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, MarkdownifyError>;
