//! Token definitions.
//!
//! A [`Token`] is the classified, positioned piece of source text the lexer
//! hands to the parser. Its [`TokenKind`] comes from a closed set; every kind
//! belongs to exactly one [`TokenCategory`], and the category order is the
//! order in which kinds are tried at a source position.

use std::fmt;

use gxl_util::Span;
use serde::Serialize;

use crate::catalog::{self, TokenDef};

/// Coarse grouping of token kinds.
///
/// The declaration order is the trial order: literal words and keywords are
/// tried before the generic identifier/number/string recognizers that would
/// otherwise also accept their characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenCategory {
    /// `true`, `false`, `null`
    Literal,
    /// Word operators and control keywords
    Keyword,
    /// Identifiers, numbers and strings
    Value,
    /// Arithmetic, comparison and other operators
    Operator,
    /// Punctuation
    Symbol,
    /// Tokens the parser skips (comments)
    Invisible,
}

impl TokenCategory {
    /// Upper-case name of the category.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Literal => "LITERAL",
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Value => "VALUE",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Symbol => "SYMBOL",
            TokenCategory::Invisible => "INVISIBLE",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every kind of token the lexer can produce.
///
/// The discriminant of each variant is its index in
/// [`catalog::CATALOG`], so the variants are listed in catalog declaration
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // Literals
    True,
    False,
    Null,

    // Values
    Identifier,
    Long,
    Double,
    String,

    // Operators
    Exponent,
    Multiplication,
    Division,
    Modulo,
    Plus,
    Minus,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    ValueEquals,
    ValueNotEquals,
    ValueEqualsExact,
    ValueNotEqualsExact,
    Concatenate,

    // Keywords
    BoolNot,
    BoolAnd,
    BoolOr,
    KwIf,
    KwThen,
    KwElse,

    // Operators that must be tried after the comparison operators
    Arrow,
    ThinArrow,
    Assign,
    NullCoalesce,

    // Symbols
    ParenthesisOpen,
    OptionalParenthesisOpen,
    ParenthesisClose,
    Comma,
    Dot,
    OptionalDot,
    BracketOpen,
    OptionalBracketOpen,
    BracketClose,

    // Invisible
    Comment,
}

impl TokenKind {
    /// Catalog entry describing this kind.
    #[inline]
    pub fn def(self) -> &'static TokenDef {
        &catalog::CATALOG[self as usize]
    }

    /// Category this kind belongs to.
    #[inline]
    pub fn category(self) -> TokenCategory {
        self.def().category
    }

    /// Canonical spelling for fixed-text kinds, `None` for kinds whose text
    /// varies (identifiers, numbers, strings, comments).
    #[inline]
    pub fn representation(self) -> Option<&'static str> {
        self.def().representation
    }

    /// True for the integer and decimal literal kinds.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, TokenKind::Long | TokenKind::Double)
    }

    /// Upper-snake-case name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Long => "LONG",
            TokenKind::Double => "DOUBLE",
            TokenKind::String => "STRING",
            TokenKind::Exponent => "EXPONENT",
            TokenKind::Multiplication => "MULTIPLICATION",
            TokenKind::Division => "DIVISION",
            TokenKind::Modulo => "MODULO",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            TokenKind::ValueEquals => "VALUE_EQUALS",
            TokenKind::ValueNotEquals => "VALUE_NOT_EQUALS",
            TokenKind::ValueEqualsExact => "VALUE_EQUALS_EXACT",
            TokenKind::ValueNotEqualsExact => "VALUE_NOT_EQUALS_EXACT",
            TokenKind::Concatenate => "CONCATENATE",
            TokenKind::BoolNot => "BOOL_NOT",
            TokenKind::BoolAnd => "BOOL_AND",
            TokenKind::BoolOr => "BOOL_OR",
            TokenKind::KwIf => "KW_IF",
            TokenKind::KwThen => "KW_THEN",
            TokenKind::KwElse => "KW_ELSE",
            TokenKind::Arrow => "ARROW",
            TokenKind::ThinArrow => "THIN_ARROW",
            TokenKind::Assign => "ASSIGN",
            TokenKind::NullCoalesce => "NULL_COALESCE",
            TokenKind::ParenthesisOpen => "PARENTHESIS_OPEN",
            TokenKind::OptionalParenthesisOpen => "OPTIONAL_PARENTHESIS_OPEN",
            TokenKind::ParenthesisClose => "PARENTHESIS_CLOSE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::OptionalDot => "OPTIONAL_DOT",
            TokenKind::BracketOpen => "BRACKET_OPEN",
            TokenKind::OptionalBracketOpen => "OPTIONAL_BRACKET_OPEN",
            TokenKind::BracketClose => "BRACKET_CLOSE",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the lexer.
///
/// `text` is the matched text after normalization: fixed-spelling kinds
/// carry their canonical lower-case spelling, strings carry their unescaped
/// content without quotes, shorthand decimals carry the leading `0`, and
/// comments carry everything after the `#`.
///
/// `row` and `col` are zero-based and point at the first character of the
/// token. `span` covers every source byte the recognizer consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Kind of the token.
    pub kind: TokenKind,
    /// Category of the kind, copied for cheap filtering.
    pub category: TokenCategory,
    /// Normalized text of the token.
    pub text: String,
    /// Row of the first character (0-based).
    pub row: u32,
    /// Column of the first character (0-based).
    pub col: u32,
    /// Consumed source range.
    pub span: Span,
}

impl Token {
    /// Returns false for tokens the parser ignores (comments).
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.category != TokenCategory::Invisible
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}:{}", self.kind, self.text, self.row, self.col)
    }
}
