//! Identifier recognition.
//!
//! Identifiers start with an ASCII letter and continue with ASCII letters,
//! digits and underscores. Literal words and keywords never reach this
//! recognizer as a whole word because they are tried first; a word that
//! merely starts with one (`andromeda`, `nullable`) is an identifier.

use crate::catalog::is_identifier_continue;
use crate::cursor::Cursor;
use crate::error::LexResult;

/// Reads a greedy identifier.
pub(crate) fn recognize_identifier(cursor: &mut Cursor<'_>) -> LexResult<Option<String>> {
    let first = match cursor.next() {
        Some(c) if c.is_ascii_alphabetic() => c,
        _ => return Ok(None),
    };

    let mut text = String::new();
    text.push(first);

    while let Some(c) = cursor.peek() {
        if !is_identifier_continue(c) {
            break;
        }
        text.push(c);
        cursor.next();
    }

    Ok(Some(text))
}
