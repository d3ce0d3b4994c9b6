//! Fixed-spelling recognition.

use crate::cursor::Cursor;

/// Matches `spelling` case-insensitively at the cursor.
///
/// The token text is always the canonical spelling, whatever case the source
/// used. When `reject_next` is given and the character after the match
/// satisfies it, the match is dropped; the caller's checkpoint rewinds.
pub(crate) fn recognize_sequence(
    cursor: &mut Cursor<'_>,
    spelling: &'static str,
    reject_next: Option<fn(char) -> bool>,
) -> Option<String> {
    for expected in spelling.chars() {
        let found = cursor.next()?;
        if !found.eq_ignore_ascii_case(&expected) {
            return None;
        }
    }

    if let (Some(reject), Some(next)) = (reject_next, cursor.peek()) {
        if reject(next) {
            return None;
        }
    }

    Some(spelling.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, spelling: &'static str, reject_next: Option<fn(char) -> bool>) -> Option<String> {
        let mut cursor = Cursor::new(source);
        recognize_sequence(&mut cursor, spelling, reject_next)
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(run("==", "==", None), Some("==".to_string()));
        assert_eq!(run("?.x", "?.", None), Some("?.".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(run("TrUe", "true", None), Some("true".to_string()));
        assert_eq!(run("ELSE", "else", None), Some("else".to_string()));
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(run("=>", "==", None), None);
        assert_eq!(run("tru", "true", None), None);
        assert_eq!(run("", "+", None), None);
    }

    #[test]
    fn test_reject_next() {
        let is_equals: fn(char) -> bool = |c| c == '=';
        assert_eq!(run("===", "==", Some(is_equals)), None);
        assert_eq!(run("== ", "==", Some(is_equals)), Some("==".to_string()));
        // nothing follows, nothing to reject
        assert_eq!(run("==", "==", Some(is_equals)), Some("==".to_string()));
    }

    #[test]
    fn test_consumes_only_spelling() {
        let mut cursor = Cursor::new("->x");
        assert_eq!(recognize_sequence(&mut cursor, "->", None), Some("->".to_string()));
        assert_eq!(cursor.peek(), Some('x'));
    }
}
