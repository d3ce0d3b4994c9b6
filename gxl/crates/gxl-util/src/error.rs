//! Core error types for gxl-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// Requested line does not exist in the source
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },

    /// Requested column lies beyond the end of the line
    #[error("Invalid column: {column} (line {line} has {line_len} characters)")]
    InvalidColumn {
        /// Line the column was requested on (1-based)
        line: usize,
        /// Requested column (1-based)
        column: usize,
        /// Character count of the line
        line_len: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
