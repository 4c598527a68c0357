//! # markdownify-core
//!
//! Parser-agnostic rendering of HTML node trees to Markdown.
//!
//! This crate holds the core of the conversion: the [`Node`] structure, the
//! element classification rules, and the recursive renderer. It performs no
//! HTML parsing: any parser can convert its output into [`Node`] trees and
//! feed them to [`render`]. The `markdownify` crate provides a
//! scraper-based front end on top of this one.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parser front──▶ ┌───────────┐
//!                               │ Node tree │ ──render──▶ Markdown String
//! Hand-built trees ────────────▶└───────────┘
//! ```
//!
//! Rendering is a pure function of the tree: no mutation, no retained
//! state, reentrant across threads. Recursion depth equals document
//! nesting depth; there is no explicit depth guard, so pathologically deep
//! trees can exhaust the stack.
//!
//! Scope notes: only headers, links, paragraphs, block quotes, unordered
//! lists, and line breaks are rendered with Markdown syntax. Ordered lists
//! are not recognized, and `<pre>` content has its whitespace collapsed
//! like any other text.
//!
//! # Example
//!
//! ```rust
//! use markdownify_core::{render, Node};
//!
//! let mut heading = Node::element("h1");
//! heading.add_child(Node::text("Hello World"));
//!
//! let mut para = Node::element("p");
//! para.add_child(Node::text("Converted from a DOM tree."));
//!
//! let mut root = Node::fragment();
//! root.add_child(heading);
//! root.add_child(para);
//!
//! assert_eq!(render(&root), "# Hello World\n\nConverted from a DOM tree.");
//! ```

pub mod classify;
pub mod node;
mod render;
mod text;

pub use classify::{
    block_adjacency, classify, heading_marker, is_block, is_header, is_list, is_list_item,
    is_paragraph, is_quote, BlockAdjacency, ElementKind,
};
pub use node::{Node, NodeKind};
pub use render::render;
pub use text::{collapse_whitespace, indent_lines, squeeze_blank_lines};
