//! gxl-lex - Lexical Analyzer for gxl Expressions
//!
//! This crate turns the source text of a gxl expression into a sequence of
//! classified, positioned tokens for a downstream parser.
//!
//! # Overview
//!
//! The lexer is an ordered trial matcher. At each position it skips
//! whitespace and newlines, then runs the recognizer of every token kind in
//! trial order and keeps the first match. Recognizers that do not match
//! leave the cursor untouched; recognizers for numbers look ahead to make
//! sure the digits are followed by something that can legally follow a
//! number.
//!
//! # Example Usage
//!
//! ```
//! use gxl_lex::{tokenize, TokenCategory, TokenKind};
//!
//! let tokens = tokenize("if a >= .5 then \"yes\" else null").unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::KwIf);
//! assert_eq!(tokens[0].category, TokenCategory::Keyword);
//! assert_eq!(tokens[2].kind, TokenKind::GreaterThanOrEqual);
//! assert_eq!(tokens[3].text, "0.5");
//! assert_eq!(tokens[5].text, "yes");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind and category definitions
//! - [`catalog`] - Static token table and its trial-order views
//! - [`lexer`] - The trial loop and the recognizers
//! - [`cursor`] - Character cursor with undo and snapshots
//! - [`config`] - Whitespace configuration
//! - [`error`] - Fatal lexing errors
//!
//! # Token Categories
//!
//! Categories are tried in this order; within a category, kinds are tried in
//! declaration order.
//!
//! ## Literals
//!
//! `true`, `false`, `null`
//!
//! ## Keywords
//!
//! `not`, `and`, `or`, `if`, `then`, `else`
//!
//! Words are matched case-insensitively and only as whole words: `ANDroid`
//! is an identifier.
//!
//! ## Values
//!
//! - **Identifier**: `[a-zA-Z][a-zA-Z0-9_]*`
//! - **Integer**: `42`
//! - **Decimal**: `3.14`, `.5` (text `0.5`)
//! - **String**: `"hello"`, with escapes `\"`, `\s` (single quote), `\\`
//!
//! ## Operators
//!
//! - **Arithmetic**: `^`, `*`, `/`, `%`, `+`, `-`
//! - **Comparison**: `>`, `>=`, `<`, `<=`, `==`, `!=`, `===`, `!==`
//! - **Other**: `&`, `=>`, `->`, `=`, `??`
//!
//! ## Symbols
//!
//! `(`, `?(`, `)`, `,`, `.`, `?.`, `[`, `?[`, `]`
//!
//! ## Invisible
//!
//! `# comment` up to the end of the line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use tracing::debug;

// Re-export main types for convenience
pub use catalog::{non_numeric, trial_order, value_kinds, Recognizer, TokenDef, CATALOG};
pub use config::LexerConfig;
pub use cursor::{Checkpoint, Cursor, CursorSnapshot};
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenCategory, TokenKind};

/// Tokenizes `source` with the default whitespace set.
///
/// Produces the same tokens, in the same order, as iterating a [`Lexer`].
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    tokenize_with_config(source, LexerConfig::shared_default())
}

/// Tokenizes `source` with an explicit configuration.
pub fn tokenize_with_config(source: &str, config: &LexerConfig) -> LexResult<Vec<Token>> {
    let result: LexResult<Vec<Token>> = Lexer::with_config(source, config).collect();

    match &result {
        Ok(tokens) => debug!(tokens = tokens.len(), bytes = source.len(), "lexing finished"),
        Err(err) => debug!(error = %err, "lexing failed"),
    }

    result
}
