//! Lexing failures.
//!
//! A recognizer that does not match returns `Ok(None)`; that is ordinary
//! control flow. The variants here are the only two conditions that end a
//! lexing run.

use gxl_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

/// Fatal lexing error.
///
/// Positions are zero-based; messages print them one-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached inside a string literal.
    #[error("unterminated string starting at {}:{}", .row + 1, .col + 1)]
    UnterminatedString {
        /// Row of the opening quote.
        row: u32,
        /// Column of the opening quote.
        col: u32,
        /// Full source text of the run.
        raw_text: String,
    },

    /// No token kind matched at a position.
    ///
    /// The position is where the failed token would have started. The
    /// character that stops the match may lie further right: in `12$` the
    /// digits are rejected because of the `$`.
    #[error("no token matches the input at {}:{} starting with {character:?}", .row + 1, .col + 1)]
    UnrecognizedCharacter {
        /// Row of the token start.
        row: u32,
        /// Column of the token start.
        col: u32,
        /// First character of the unmatched input.
        character: char,
        /// Full source text of the run.
        raw_text: String,
    },
}

/// Result type for lexing operations.
pub type LexResult<T> = Result<T, LexError>;

impl LexError {
    /// Row of the failure.
    pub fn row(&self) -> u32 {
        match self {
            LexError::UnterminatedString { row, .. } | LexError::UnrecognizedCharacter { row, .. } => *row,
        }
    }

    /// Column of the failure.
    pub fn col(&self) -> u32 {
        match self {
            LexError::UnterminatedString { col, .. } | LexError::UnrecognizedCharacter { col, .. } => *col,
        }
    }

    /// Source text the failing run was given.
    pub fn raw_text(&self) -> &str {
        match self {
            LexError::UnterminatedString { raw_text, .. }
            | LexError::UnrecognizedCharacter { raw_text, .. } => raw_text,
        }
    }

    /// Diagnostic code of the failure.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnrecognizedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    /// Converts the failure into a diagnostic pointing at the offending
    /// line.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, label, help) = match self {
            LexError::UnterminatedString { .. } => (
                "unterminated string literal".to_string(),
                "string starts here",
                "close the string with an unescaped `\"`",
            ),
            LexError::UnrecognizedCharacter { character, .. } => (
                format!("no token matches the input starting with `{}`", character.escape_default()),
                "no token starts here",
                "check this character and the ones after it; a number must end at whitespace, an operator or a symbol",
            ),
        };

        let mut builder = DiagnosticBuilder::error(message)
            .code(self.code())
            .span(Span::point(self.row(), self.col()))
            .help(help);

        let line_number = self.row() as usize + 1;
        let column = self.col() as usize + 1;
        if let Ok(snippet) = SourceSnippet::from_source(self.raw_text(), line_number, column) {
            builder = builder.snippet(snippet.with_label(label));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_one_based() {
        let err = LexError::UnterminatedString {
            row: 0,
            col: 4,
            raw_text: "a & \"b".to_string(),
        };
        assert_eq!(err.to_string(), "unterminated string starting at 1:5");

        let err = LexError::UnrecognizedCharacter {
            row: 1,
            col: 0,
            character: '$',
            raw_text: "a\n$".to_string(),
        };
        assert_eq!(err.to_string(), "no token matches the input at 2:1 starting with '$'");
    }

    #[test]
    fn test_accessors() {
        let err = LexError::UnrecognizedCharacter {
            row: 3,
            col: 7,
            character: '@',
            raw_text: "x".to_string(),
        };
        assert_eq!(err.row(), 3);
        assert_eq!(err.col(), 7);
        assert_eq!(err.raw_text(), "x");
        assert_eq!(err.code(), DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    }

    #[test]
    fn test_unterminated_string_diagnostic() {
        let err = LexError::UnterminatedString {
            row: 0,
            col: 4,
            raw_text: "a & \"b".to_string(),
        };
        let rendered = err.to_diagnostic().render();

        assert!(rendered.starts_with("error[E1002]: unterminated string literal\n"));
        assert!(rendered.contains(" --> 1:5\n"));
        assert!(rendered.contains("1 | a & \"b\n"));
        assert!(rendered.contains("|     ^ string starts here"));
        assert!(rendered.contains("= help: close the string"));
    }

    #[test]
    fn test_unrecognized_character_diagnostic() {
        let err = LexError::UnrecognizedCharacter {
            row: 1,
            col: 2,
            character: '$',
            raw_text: "a +\nb $".to_string(),
        };
        let diag = err.to_diagnostic();

        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.span, Span::point(1, 2));
        assert_eq!(diag.snippets.len(), 1);
        assert!(diag.render().contains("2 | b $\n"));
    }

    #[test]
    fn test_diagnostic_without_snippet_for_bad_position() {
        let err = LexError::UnrecognizedCharacter {
            row: 9,
            col: 0,
            character: '$',
            raw_text: "$".to_string(),
        };
        let diag = err.to_diagnostic();
        assert!(diag.snippets.is_empty());
        assert!(diag.render().starts_with("error[E1001]"));
    }

    #[test]
    fn test_failure_inside_number_points_at_token_start() {
        let err = crate::tokenize("a + 12$").unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedCharacter { row: 0, col: 4, character: '1', .. }));

        let rendered = err.to_diagnostic().render();
        assert!(rendered.starts_with("error[E1001]: no token matches the input starting with `1`\n"));
        assert!(rendered.contains(" --> 1:5\n"));
        assert!(rendered.contains("|     ^ no token starts here"));
        assert!(!rendered.contains("remove the character"));
    }
}
