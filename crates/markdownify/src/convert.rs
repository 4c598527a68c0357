//! Top-level conversion entry points: parse then render.

use std::io::Read;

use markdownify_core::render;

use crate::html::parse_html;
use crate::Result;

/// Convert an HTML string to Markdown.
///
/// Parsing is lenient and rendering is total, so this never fails.
///
/// # Example
///
/// ```rust
/// let markdown = markdownify::convert("<h1>Hello</h1><p>World</p>");
/// assert_eq!(markdown, "# Hello\n\nWorld");
/// ```
pub fn convert(html: &str) -> String {
    render(&parse_html(html))
}

/// Convert a byte stream of HTML to Markdown.
///
/// Reads the stream to the end, decodes it as UTF-8, parses, and renders.
/// The only failure modes are an unreadable stream and bytes that are not
/// valid UTF-8; the HTML parser itself repairs malformed markup rather
/// than rejecting it.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
///
/// let markdown = markdownify::convert_reader(Cursor::new("<p>Hello World</p>"))?;
/// assert_eq!(markdown, "Hello World");
/// # Ok::<(), markdownify::MarkdownifyError>(())
/// ```
pub fn convert_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let html = String::from_utf8(bytes)?;

    Ok(convert(&html))
}
