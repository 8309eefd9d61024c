//! iCalendar text escaping.

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Escapes backslash, comma, semicolon, and newlines. A CRLF pair becomes a
/// single `\n`; a lone CR is dropped.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_reserved_characters() {
        assert_eq!(escape_text("Lovelace, Ada"), "Lovelace\\, Ada");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("semi;colon"), "semi\\;colon");
    }

    #[test]
    fn escape_text_passthrough() {
        assert_eq!(escape_text("Heafey 101"), "Heafey 101");
        assert_eq!(escape_text(""), "");
    }
}
