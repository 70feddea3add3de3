//! String/comment context classification within a single line.
//!
//! Construct detectors use this to discard matches that sit inside a string
//! literal or a comment. The classifier only reasons about context opened
//! within the line itself; cross-line block-comment state is handled one
//! level up, in the scanner, before detectors ever run.

/// Report whether `pos` falls inside a string literal or a comment opened
/// earlier on the same line.
///
/// Scans bytes from the start of the line up to (but not including) `pos`:
///
/// - a `"` not immediately preceded by `\` toggles string context (a plain
///   toggle; escape sequences beyond backslash-quote are not understood),
/// - outside of strings, `//` makes the rest of the line a comment,
///   `/*` opens block-comment context and `*/` closes it.
///
/// A `pos` beyond the end of the line scans the whole line. Pure function,
/// never fails.
pub fn in_comment_or_string(line: &str, pos: usize) -> bool {
    let bytes = line.as_bytes();
    let end = pos.min(bytes.len());

    let mut in_string = false;
    let mut in_comment = false;

    let mut i = 0;
    while i < end {
        if bytes[i] == b'"' && (i == 0 || bytes[i - 1] != b'\\') {
            in_string = !in_string;
        }

        if !in_string && i + 1 < bytes.len() {
            let pair = &bytes[i..i + 2];
            if pair == b"//" {
                return true;
            }
            if pair == b"/*" {
                in_comment = true;
            }
            if pair == b"*/" {
                in_comment = false;
            }
        }

        i += 1;
    }

    in_comment || in_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_zero_is_never_in_context() {
        assert!(!in_comment_or_string("", 0));
        assert!(!in_comment_or_string("for (;;) {}", 0));
        assert!(!in_comment_or_string("// comment", 0));
        assert!(!in_comment_or_string("\"string\"", 0));
    }

    #[test]
    fn test_inside_string_literal() {
        let line = r#"printf("for (x)");"#;
        let pos = line.find("for").unwrap();
        assert!(in_comment_or_string(line, pos));
    }

    #[test]
    fn test_after_closed_string_literal() {
        let line = r#"char *s = "text"; if (x) {"#;
        let pos = line.find("if").unwrap();
        assert!(!in_comment_or_string(line, pos));
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let line = r#"char *s = "a \" b"; more"#;
        // The escaped quote keeps string context open past it.
        let inside = line.find('b').unwrap();
        assert!(in_comment_or_string(line, inside));
    }

    #[test]
    fn test_after_line_comment_marker() {
        let line = "x = 1; // while (y)";
        let pos = line.find("while").unwrap();
        assert!(in_comment_or_string(line, pos));
    }

    #[test]
    fn test_inside_block_comment_opened_on_line() {
        let line = "x = 1; /* if (y) */ z = 2;";
        let inside = line.find("if").unwrap();
        let after = line.find('z').unwrap();
        assert!(in_comment_or_string(line, inside));
        assert!(!in_comment_or_string(line, after));
    }

    #[test]
    fn test_comment_markers_inside_string_are_ignored() {
        let line = r#"char *url = "http://host"; for (;;) {"#;
        let pos = line.find("for").unwrap();
        assert!(!in_comment_or_string(line, pos));
    }

    #[test]
    fn test_position_beyond_line_length() {
        assert!(in_comment_or_string("/* open", 1000));
        assert!(!in_comment_or_string("plain code", 1000));
    }

    #[test]
    fn test_pure_and_deterministic() {
        let line = "/* a */ \"b\" code";
        for pos in 0..=line.len() {
            assert_eq!(
                in_comment_or_string(line, pos),
                in_comment_or_string(line, pos)
            );
        }
    }
}
