//! Number literal recognition.
//!
//! Integers are runs of ASCII digits. Decimals are either the shorthand
//! `.ddd` form, whose token text gains a leading `0`, or `ddd.ddd`.
//!
//! Numbers carry no sign; `-1` is a minus operator followed by an integer.
//! A run of digits only counts as a number when it ends at whitespace, a
//! newline, end of input, or a character some non-numeric token kind
//! accepts: `123+1` is three tokens, `123$` is no number at all.

use tracing::trace;

use crate::catalog::{self, TokenDef};
use crate::cursor::Cursor;
use crate::error::LexResult;

/// Outcome of a digit collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Collected {
    /// At least one digit was read and the run ended cleanly.
    ReadOkay,
    /// No digit was read, or the digits ran into a character nothing accepts.
    CharMismatch,
    /// The cursor was already at end of input.
    NoNextChar,
}

/// Appends digits at the cursor to `out`.
///
/// Whitespace, a newline and, with `stop_before_dot`, a `.` end the run and
/// are left unconsumed. Any other character is left unconsumed as well, and
/// the run only succeeds if some non-numeric kind would match there.
pub(crate) fn collect_digits(
    cursor: &mut Cursor<'_>,
    out: &mut String,
    stop_before_dot: bool,
) -> LexResult<Collected> {
    if !cursor.has_next() {
        return Ok(Collected::NoNextChar);
    }

    let initial = out.len();

    while let Some(c) = cursor.next() {
        if c.is_ascii_digit() {
            out.push(c);
            continue;
        }

        cursor.undo();

        if cursor.is_whitespace(c) || c == '\n' || (c == '.' && stop_before_dot) {
            break;
        }

        if out.len() > initial && would_follow(cursor, catalog::non_numeric())? {
            return Ok(Collected::ReadOkay);
        }
        return Ok(Collected::CharMismatch);
    }

    if out.len() > initial {
        Ok(Collected::ReadOkay)
    } else {
        Ok(Collected::CharMismatch)
    }
}

/// Returns true if any of `defs` matches at the cursor.
///
/// Each trial runs speculatively; the cursor is back at its starting
/// position afterwards whatever the outcome. An unterminated string met
/// during a trial is still an error.
pub(crate) fn would_follow(cursor: &mut Cursor<'_>, defs: &[&'static TokenDef]) -> LexResult<bool> {
    for def in defs {
        let matched = cursor.speculate(|trial| def.recognizer.recognize(trial))?;
        if matched.is_some() {
            trace!(kind = %def.kind, row = cursor.row(), col = cursor.col(), "lookahead accepted");
            return Ok(true);
        }
    }

    trace!(row = cursor.row(), col = cursor.col(), "lookahead rejected");
    Ok(false)
}

/// Reads an integer literal.
pub(crate) fn recognize_long(cursor: &mut Cursor<'_>) -> LexResult<Option<String>> {
    let mut text = String::new();
    match collect_digits(cursor, &mut text, false)? {
        Collected::ReadOkay => Ok(Some(text)),
        Collected::CharMismatch | Collected::NoNextChar => Ok(None),
    }
}

/// Reads a decimal literal.
pub(crate) fn recognize_double(cursor: &mut Cursor<'_>) -> LexResult<Option<String>> {
    let mut text = String::new();

    if cursor.peek() == Some('.') {
        cursor.next();
        text.push_str("0.");
        return fraction(cursor, text);
    }

    if collect_digits(cursor, &mut text, true)? != Collected::ReadOkay {
        return Ok(None);
    }

    if cursor.next() != Some('.') {
        return Ok(None);
    }
    text.push('.');

    fraction(cursor, text)
}

fn fraction(cursor: &mut Cursor<'_>, mut text: String) -> LexResult<Option<String>> {
    match collect_digits(cursor, &mut text, false)? {
        Collected::ReadOkay => Ok(Some(text)),
        Collected::CharMismatch | Collected::NoNextChar => Ok(None),
    }
}
