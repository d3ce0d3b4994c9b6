//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! front-end diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use gxl_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};
//!
//! let source = "a + $";
//! let diag = DiagnosticBuilder::error("unexpected character `$`")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::point(0, 4))
//!     .snippet(SourceSnippet::from_source(source, 1, 5).unwrap())
//!     .build();
//!
//! assert!(diag.render().starts_with("error[E1001]"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

pub use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use gxl_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops processing of the input
    Error,
    /// A warning that doesn't stop processing
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Render the diagnostic as multi-line text
    ///
    /// The header carries the level and code, followed by the 1-based
    /// position, every snippet with its caret line, then notes and helps.
    ///
    /// # Examples
    ///
    /// ```
    /// use gxl_util::diagnostic::{Diagnostic, Span};
    ///
    /// let text = Diagnostic::error("bad input", Span::point(2, 0))
    ///     .render();
    /// assert_eq!(text, "error: bad input\n --> 3:1\n");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();

        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}\n", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}\n", self.level, self.message)),
        }
        out.push_str(&format!(" --> {}:{}\n", self.span.line + 1, self.span.column + 1));

        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
