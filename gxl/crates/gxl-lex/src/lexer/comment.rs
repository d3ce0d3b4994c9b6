//! Comment recognition.

use crate::cursor::Cursor;
use crate::error::LexResult;

/// Reads a `#` comment up to, but not including, the next newline.
///
/// The token text is everything after the `#`.
pub(crate) fn recognize_comment(cursor: &mut Cursor<'_>) -> LexResult<Option<String>> {
    if cursor.next() != Some('#') {
        return Ok(None);
    }

    let mut text = String::new();
    while let Some(c) = cursor.peek() {
        if c == '\n' {
            break;
        }
        text.push(c);
        cursor.next();
    }

    Ok(Some(text))
}
