//! Whitespace normalization primitives.

/// Collapse every maximal run of whitespace into a single space.
///
/// Does not trim the ends; fringe whitespace is the renderer's concern
/// because it depends on sibling context.
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Prefix every line with `indent`, blanking lines that are whitespace-only
/// after prefixing.
///
/// Splits on `'\n'` rather than `str::lines` so a trailing newline survives
/// the round trip.
pub fn indent_lines(text: &str, indent: &str) -> String {
    text.split('\n')
        .map(|line| {
            let indented = format!("{}{}", indent, line);
            if indented.trim().is_empty() {
                String::new()
            } else {
                indented
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Final document pass: trim all leading and trailing whitespace, then cap
/// every run of consecutive newlines at 2, so at most one blank line
/// separates blocks anywhere in the output.
pub fn squeeze_blank_lines(text: &str) -> String {
    let trimmed = text.trim();
    let mut result = String::with_capacity(trimmed.len());
    let mut newline_count = 0;

    for c in trimmed.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(c);
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b"), "a b");
        assert_eq!(collapse_whitespace("a\n\t b"), "a b");
        assert_eq!(collapse_whitespace("  a  "), " a ");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_collapse_whitespace_is_idempotent() {
        let once = collapse_whitespace("a \n b\t\tc");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn test_indent_lines() {
        assert_eq!(indent_lines("a\nb", "  "), "  a\n  b");
        assert_eq!(indent_lines("a", ""), "a");
    }

    #[test]
    fn test_indent_lines_blanks_whitespace_only_lines() {
        assert_eq!(indent_lines("a\n   \nb", "  "), "  a\n\n  b");
        // an empty line stays empty rather than gaining trailing indent
        assert_eq!(indent_lines("a\n\nb", "  "), "  a\n\n  b");
    }

    #[test]
    fn test_indent_lines_preserves_trailing_newline() {
        assert_eq!(indent_lines("* item\n", "  "), "  * item\n");
    }

    #[test]
    fn test_squeeze_blank_lines() {
        assert_eq!(squeeze_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(squeeze_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(squeeze_blank_lines("  a\n\nb\n\n"), "a\n\nb");
        assert_eq!(squeeze_blank_lines("\n\n"), "");
    }

    #[test]
    fn test_squeeze_blank_lines_is_idempotent() {
        let once = squeeze_blank_lines("a\n\n\n\nb\n\nc");
        assert_eq!(squeeze_blank_lines(&once), once);
    }
}
