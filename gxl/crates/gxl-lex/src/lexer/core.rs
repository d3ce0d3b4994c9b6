//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the trial loop that turns
//! the character stream into tokens.

use std::iter::FusedIterator;

use gxl_util::Span;
use tracing::trace;

use crate::catalog;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::Token;

/// Lexer for gxl expressions.
///
/// At every position the lexer skips whitespace and newlines, then tries the
/// token kinds in trial order and keeps the first one that matches. The
/// lexer is an iterator over `LexResult<Token>`; after the first error it
/// yields nothing more.
///
/// # Example
///
/// ```
/// use gxl_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("a ?? 1");
/// let kinds: Vec<TokenKind> = lexer
///     .by_ref()
///     .map(|token| token.map(|token| token.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::NullCoalesce, TokenKind::Long]);
/// assert!(lexer.next().is_none());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Set once the end of input or an error has been reached.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer using the default whitespace set.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::shared_default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            cursor: Cursor::with_config(source, config),
            finished: false,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// [`LexError::UnrecognizedCharacter`] if no kind matches at a position,
    /// [`LexError::UnterminatedString`] if a string runs into the end of
    /// input.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.skip_whitespace();

        let Some(character) = self.cursor.peek() else {
            return Ok(None);
        };

        let row = self.cursor.row();
        let col = self.cursor.col();
        let start = self.cursor.position();

        for def in catalog::trial_order() {
            let Some(text) = def.recognizer.recognize(&mut self.cursor)? else {
                continue;
            };

            trace!(kind = %def.kind, row, col, text = %text, "token");
            return Ok(Some(Token {
                kind: def.kind,
                category: def.category,
                text,
                row,
                col,
                span: Span::new(start, self.cursor.position(), row, col),
            }));
        }

        Err(LexError::UnrecognizedCharacter {
            row,
            col,
            character,
            raw_text: self.cursor.raw_text().to_string(),
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if !(self.cursor.is_whitespace(c) || c == '\n') {
                break;
            }
            self.cursor.next();
        }
    }

    /// Returns the current row (0-based).
    pub fn row(&self) -> u32 {
        self.cursor.row()
    }

    /// Returns the current column (0-based).
    pub fn col(&self) -> u32 {
        self.cursor.col()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            },
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}
