//! String literal recognition.
//!
//! Strings are delimited by `"`. Escapes are resolved against what has
//! already been appended to the token text rather than against the source:
//!
//! - `\"` becomes `"`
//! - `\s` becomes `'`
//! - `\\` becomes `\`
//!
//! Any other backslash is kept as written. Strings may span lines.

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};

/// Reads a string literal; the token text excludes the quotes.
///
/// Running out of input before the closing quote is fatal and reports the
/// position of the opening quote.
pub(crate) fn recognize_string(cursor: &mut Cursor<'_>) -> LexResult<Option<String>> {
    let (row, col) = (cursor.row(), cursor.col());

    if cursor.next() != Some('"') {
        return Ok(None);
    }

    let mut text = String::new();

    while let Some(c) = cursor.next() {
        let mut tail = text.chars().rev();
        let previous = tail.next();
        let before_previous = tail.next();

        let escaped = previous == Some('\\') && before_previous != Some('\\');

        if previous == Some('\\') && before_previous == Some('\\') {
            text.pop();
        }

        match c {
            '"' if escaped => {
                text.pop();
                text.push('"');
            },
            '"' => return Ok(Some(text)),
            's' if escaped => {
                text.pop();
                text.push('\'');
            },
            _ => text.push(c),
        }
    }

    Err(LexError::UnterminatedString {
        row,
        col,
        raw_text: cursor.raw_text().to_string(),
    })
}
