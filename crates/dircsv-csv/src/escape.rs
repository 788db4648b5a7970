//! Single-line escaping for extracted text.

/// Make text safe for a single CSV field on a single line.
///
/// `None` maps to an empty string. Every `"` is doubled; CRLF, LF and lone CR
/// each become the two characters `\n`; tabs become `\t`. An author's literal
/// backslash-n is indistinguishable from a real line break afterwards.
///
/// Not idempotent on raw input: quotes double again on every pass.
#[must_use]
pub fn csv_safe<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\"\""),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        assert_eq!(csv_safe(None::<&str>), "");
        assert_eq!(csv_safe(""), "");
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(csv_safe(r#"He said "hi""#), r#"He said ""hi"""#);
    }

    #[test]
    fn test_line_breaks_become_literal_backslash_n() {
        assert_eq!(csv_safe("a\r\nb"), "a\\nb");
        assert_eq!(csv_safe("a\nb"), "a\\nb");
        assert_eq!(csv_safe("a\rb"), "a\\nb");
        assert_eq!(csv_safe("a\n\r\nb"), "a\\n\\nb");
        assert_eq!(csv_safe("a\r\rb"), "a\\n\\nb");
    }

    #[test]
    fn test_tabs_become_literal_backslash_t() {
        assert_eq!(csv_safe("a\tb"), "a\\tb");
    }

    #[test]
    fn test_quote_and_newline_round_trip() {
        assert_eq!(csv_safe("He said \"hi\"\nBye"), "He said \"\"hi\"\"\\nBye");
    }

    #[test]
    fn test_output_is_single_line() {
        let out = csv_safe("one\ntwo\r\nthree\rfour\tfive");
        assert!(!out.contains('\n'));
        assert!(!out.contains('\r'));
        assert!(!out.contains('\t'));
    }

    #[test]
    fn test_idempotent_without_quotes_or_breaks() {
        let once = csv_safe("line one\nline\ttwo");
        assert_eq!(csv_safe(once.as_str()), once);
    }

    #[test]
    fn test_not_idempotent_with_quotes() {
        let once = csv_safe("\"q\"");
        let twice = csv_safe(once.as_str());
        assert_eq!(once, "\"\"q\"\"");
        assert_eq!(twice, "\"\"\"\"q\"\"\"\"");
    }

    #[test]
    fn test_unicode_untouched() {
        assert_eq!(csv_safe("Grüße – 世界"), "Grüße – 世界");
    }

    #[test]
    fn test_existing_backslash_n_passes_through() {
        assert_eq!(csv_safe("C:\\new"), "C:\\new");
    }
}
