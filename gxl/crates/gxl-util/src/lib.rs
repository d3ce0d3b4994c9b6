//! gxl-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the gxl expression-language front end:
//!
//! - [`span`] - Source locations attached to tokens
//! - [`diagnostic`] - Error reporting with codes, notes and caret snippets
//! - [`error`] - Error types raised by the utilities themselves
//!
//! # Example
//!
//! ```
//! use gxl_util::{DiagnosticBuilder, DiagnosticCode, Span};
//!
//! let diag = DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::point(0, 4))
//!     .build();
//!
//! assert!(diag.render().starts_with("error[E1002]: unterminated string literal"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
