// Per-cell normalization and escaping for the delimited export format.
//
// The steps run in a fixed order; each one feeds the next and the order is
// load-bearing (line breaks must go before whitespace collapsing, quote
// doubling before comma wrapping).

/// Turns raw cell text into one escaped CSV field.
///
/// 1. Remove all CR/LF characters, collapsing multi-line content onto one
///    line. No replacement is inserted.
/// 2. Collapse each non-overlapping pair of consecutive whitespace
///    characters into a single space. This is intentionally NOT a general
///    whitespace collapse: three consecutive spaces come out as two. Cells
///    with longer whitespace runs keep part of them, and downstream
///    consumers rely on that exact output.
/// 3. Trim leading and trailing whitespace.
/// 4. Double embedded quote characters.
/// 5. Wrap the field in quotes only when it contains a comma.
pub fn export_field(raw: &str) -> String {
    let no_breaks = strip_line_breaks(raw);
    let collapsed = collapse_whitespace_pairs(&no_breaks);
    let trimmed = collapsed.trim();
    let escaped = trimmed.replace('"', "\"\"");
    if escaped.contains(',') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

fn strip_line_breaks(input: &str) -> String {
    input.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

// Left-to-right scan: whenever the current and the next character are both
// whitespace, emit one space and consume both. A lone trailing whitespace
// character after a consumed pair is kept as-is.
fn collapse_whitespace_pairs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            if let Some(next) = chars.peek() {
                if next.is_whitespace() {
                    chars.next();
                    out.push(' ');
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(export_field("Widget"), "Widget");
    }

    #[test]
    fn test_quote_is_doubled_without_wrapping() {
        assert_eq!(export_field("\"abc\""), "\"\"abc\"\"");
    }

    #[test]
    fn test_comma_wraps_field() {
        assert_eq!(export_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_quote_doubling_applied_before_comma_wrapping() {
        assert_eq!(export_field("a\"b,c\""), "\"a\"\"b,c\"\"\"");
    }

    #[test]
    fn test_two_spaces_collapse_to_one() {
        assert_eq!(export_field("a  b"), "a b");
    }

    #[test]
    fn test_three_spaces_collapse_only_one_pair() {
        // Only the first pair collapses; the collapse is not idempotent.
        assert_eq!(export_field("a   b"), "a  b");
    }

    #[test]
    fn test_four_spaces_collapse_to_two() {
        assert_eq!(export_field("a    b"), "a  b");
    }

    #[test]
    fn test_mixed_whitespace_pair_becomes_space() {
        assert_eq!(export_field("a \tb"), "a b");
    }

    #[test]
    fn test_newlines_removed_without_inserting_space() {
        assert_eq!(export_field("line1\nline2"), "line1line2");
        assert_eq!(export_field("line1\r\nline2"), "line1line2");
    }

    #[test]
    fn test_newline_between_spaces_leaves_collapsible_pair() {
        // "a \n b" loses the newline first, leaving two spaces to collapse.
        assert_eq!(export_field("a \n b"), "a b");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        assert_eq!(export_field("  padded  "), "padded");
    }

    #[test]
    fn test_empty_cell_stays_empty() {
        assert_eq!(export_field(""), "");
    }
}
