//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the trial loop
//! - `sequence` - Fixed-spelling operators, symbols, keywords and literals
//! - `identifier` - Identifier recognition
//! - `number` - Integer and decimal literals, with follow-set lookahead
//! - `string` - String literals and their escapes
//! - `comment` - Line comments

pub(crate) mod comment;
mod core;
pub(crate) mod identifier;
pub(crate) mod number;
pub(crate) mod sequence;
pub(crate) mod string;

pub use self::core::Lexer;
