//! The token catalog.
//!
//! Every [`TokenKind`] has exactly one [`TokenDef`] in [`CATALOG`], stored at
//! the index of its discriminant. A definition pairs the kind's category and
//! canonical spelling with the [`Recognizer`] that reads it from a
//! [`Cursor`].
//!
//! The lexer never walks the catalog in declaration order. It walks
//! [`trial_order()`], the catalog stably sorted by [`TokenCategory`], so that
//! `true` is tried as a literal before it could be read as an identifier and
//! `and` as a keyword before it could be read as one.

use lazy_static::lazy_static;

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::lexer::{comment, identifier, number, sequence, string};
use crate::token::{TokenCategory, TokenKind};

/// Signature shared by the hand-written recognizers.
///
/// `Ok(Some(text))` is a match, `Ok(None)` a mismatch. Only fatal lexing
/// errors travel through `Err`.
pub type RecognizeFn = fn(&mut Cursor<'_>) -> LexResult<Option<String>>;

/// How a token kind is read from the source.
#[derive(Clone, Copy)]
pub enum Recognizer {
    /// Case-insensitive match of a fixed spelling.
    Sequence {
        /// Canonical lower-case spelling.
        spelling: &'static str,
        /// Rejects the match when the next unconsumed character satisfies it.
        reject_next: Option<fn(char) -> bool>,
    },
    /// Free-form recognizer for values and comments.
    Function(RecognizeFn),
}

impl Recognizer {
    /// Runs the recognizer at the cursor's position.
    ///
    /// Fails without reading at end of input. The attempt runs under a
    /// checkpoint, so a mismatch or an error leaves the cursor where it
    /// started and only a match advances it.
    pub fn recognize(&self, cursor: &mut Cursor<'_>) -> LexResult<Option<String>> {
        if !cursor.has_next() {
            return Ok(None);
        }

        let mut attempt = cursor.checkpoint();
        let matched = match *self {
            Recognizer::Sequence {
                spelling,
                reject_next,
            } => sequence::recognize_sequence(&mut *attempt, spelling, reject_next),
            Recognizer::Function(read) => read(&mut *attempt)?,
        };

        if matched.is_some() {
            attempt.commit();
        }
        Ok(matched)
    }
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recognizer::Sequence {
                spelling,
                reject_next,
            } => f
                .debug_struct("Sequence")
                .field("spelling", spelling)
                .field("reject_next", &reject_next.is_some())
                .finish(),
            Recognizer::Function(_) => f.write_str("Function"),
        }
    }
}

/// Static description of one token kind.
#[derive(Debug, Clone, Copy)]
pub struct TokenDef {
    /// The kind this entry describes.
    pub kind: TokenKind,
    /// Category deciding the trial position.
    pub category: TokenCategory,
    /// Canonical spelling, `None` for free-form kinds.
    pub representation: Option<&'static str>,
    /// How the kind is read.
    pub recognizer: Recognizer,
}

const fn exact(
    kind: TokenKind,
    category: TokenCategory,
    spelling: &'static str,
    reject_next: Option<fn(char) -> bool>,
) -> TokenDef {
    TokenDef {
        kind,
        category,
        representation: Some(spelling),
        recognizer: Recognizer::Sequence {
            spelling,
            reject_next,
        },
    }
}

const fn custom(kind: TokenKind, category: TokenCategory, read: RecognizeFn) -> TokenDef {
    TokenDef {
        kind,
        category,
        representation: None,
        recognizer: Recognizer::Function(read),
    }
}

fn is_equals(c: char) -> bool {
    c == '='
}

fn is_greater_than(c: char) -> bool {
    c == '>'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that may continue an identifier.
pub(crate) fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

const WORD_BOUNDARY: Option<fn(char) -> bool> = Some(is_identifier_continue);

use TokenCategory::{Invisible, Keyword, Literal, Operator, Symbol, Value};

/// Every token definition, indexed by `TokenKind as usize`.
pub static CATALOG: [TokenDef; 42] = [
    exact(TokenKind::True, Literal, "true", WORD_BOUNDARY),
    exact(TokenKind::False, Literal, "false", WORD_BOUNDARY),
    exact(TokenKind::Null, Literal, "null", WORD_BOUNDARY),
    custom(TokenKind::Identifier, Value, identifier::recognize_identifier),
    custom(TokenKind::Long, Value, number::recognize_long),
    custom(TokenKind::Double, Value, number::recognize_double),
    custom(TokenKind::String, Value, string::recognize_string),
    exact(TokenKind::Exponent, Operator, "^", None),
    exact(TokenKind::Multiplication, Operator, "*", None),
    exact(TokenKind::Division, Operator, "/", None),
    exact(TokenKind::Modulo, Operator, "%", None),
    exact(TokenKind::Plus, Operator, "+", None),
    exact(TokenKind::Minus, Operator, "-", Some(is_greater_than)),
    exact(TokenKind::GreaterThan, Operator, ">", Some(is_equals)),
    exact(TokenKind::GreaterThanOrEqual, Operator, ">=", None),
    exact(TokenKind::LessThan, Operator, "<", Some(is_equals)),
    exact(TokenKind::LessThanOrEqual, Operator, "<=", None),
    exact(TokenKind::ValueEquals, Operator, "==", Some(is_equals)),
    exact(TokenKind::ValueNotEquals, Operator, "!=", Some(is_equals)),
    exact(TokenKind::ValueEqualsExact, Operator, "===", None),
    exact(TokenKind::ValueNotEqualsExact, Operator, "!==", None),
    exact(TokenKind::Concatenate, Operator, "&", None),
    exact(TokenKind::BoolNot, Keyword, "not", WORD_BOUNDARY),
    exact(TokenKind::BoolAnd, Keyword, "and", WORD_BOUNDARY),
    exact(TokenKind::BoolOr, Keyword, "or", WORD_BOUNDARY),
    exact(TokenKind::KwIf, Keyword, "if", WORD_BOUNDARY),
    exact(TokenKind::KwThen, Keyword, "then", WORD_BOUNDARY),
    exact(TokenKind::KwElse, Keyword, "else", WORD_BOUNDARY),
    exact(TokenKind::Arrow, Operator, "=>", None),
    exact(TokenKind::ThinArrow, Operator, "->", None),
    exact(TokenKind::Assign, Operator, "=", Some(is_equals)),
    exact(TokenKind::NullCoalesce, Operator, "??", None),
    exact(TokenKind::ParenthesisOpen, Symbol, "(", None),
    exact(TokenKind::OptionalParenthesisOpen, Symbol, "?(", None),
    exact(TokenKind::ParenthesisClose, Symbol, ")", None),
    exact(TokenKind::Comma, Symbol, ",", None),
    exact(TokenKind::Dot, Symbol, ".", Some(is_digit)),
    exact(TokenKind::OptionalDot, Symbol, "?.", Some(is_digit)),
    exact(TokenKind::BracketOpen, Symbol, "[", None),
    exact(TokenKind::OptionalBracketOpen, Symbol, "?[", None),
    exact(TokenKind::BracketClose, Symbol, "]", None),
    custom(TokenKind::Comment, Invisible, comment::recognize_comment),
];

lazy_static! {
    static ref TRIAL_ORDER: Vec<&'static TokenDef> = {
        let mut defs: Vec<&'static TokenDef> = CATALOG.iter().collect();
        // stable: declaration order survives within a category
        defs.sort_by_key(|def| def.category);
        defs
    };
    static ref NON_NUMERIC: Vec<&'static TokenDef> = CATALOG
        .iter()
        .filter(|def| !def.kind.is_numeric())
        .collect();
    static ref VALUE_KINDS: Vec<&'static TokenDef> = CATALOG
        .iter()
        .filter(|def| def.category == TokenCategory::Value)
        .collect();
}

/// The catalog in the order kinds are tried at a source position.
pub fn trial_order() -> &'static [&'static TokenDef] {
    &TRIAL_ORDER
}

/// Every kind except the two numeric ones, in declaration order.
///
/// These are the kinds that may legally follow the digits of a number.
pub fn non_numeric() -> &'static [&'static TokenDef] {
    &NON_NUMERIC
}

/// Identifier, integer, decimal and string, in declaration order.
pub fn value_kinds() -> &'static [&'static TokenDef] {
    &VALUE_KINDS
}
