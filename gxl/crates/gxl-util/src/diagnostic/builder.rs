//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Level, Span};
use crate::error::{DiagnosticError, DiagnosticResult};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with a highlighted
/// column range. Line and columns are 1-based.
///
/// # Examples
///
/// ```
/// use gxl_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("a == \"b", 1, 6, 7, Some("string starts here"));
/// assert!(snippet.format().contains('^'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (1-based)
    /// * `end_column` - Column where the issue ends (1-based)
    /// * `label` - Optional label to display under the highlighted range
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Cut the snippet for `line_number`/`column` out of a whole source text
    ///
    /// The column may point one past the last character of the line, which
    /// is where errors raised at the end of input land.
    ///
    /// # Errors
    ///
    /// Fails if the line does not exist or the column lies further right.
    ///
    /// # Examples
    ///
    /// ```
    /// use gxl_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::from_source("a\nb + $", 2, 5).unwrap();
    /// assert_eq!(snippet.line, "b + $");
    /// assert_eq!(snippet.start_column, 5);
    /// ```
    pub fn from_source(source: &str, line_number: usize, column: usize) -> DiagnosticResult<Self> {
        let max_lines = source.split('\n').count();
        let line = line_number
            .checked_sub(1)
            .and_then(|index| source.split('\n').nth(index))
            .ok_or(DiagnosticError::InvalidLineNumber {
                line: line_number,
                max_lines,
            })?;

        let line_len = line.chars().count();
        if column == 0 || column > line_len + 1 {
            return Err(DiagnosticError::InvalidColumn {
                line: line_number,
                column,
                line_len,
            });
        }

        Ok(Self::point(line.trim_end_matches('\r'), line_number, column))
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing at the
    /// highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        // Tabs keep their width so the caret lines up under the source
        for c in self.line.chars().take(underline_start) {
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        let missing = underline_start.saturating_sub(self.line.chars().count());
        result.extend(std::iter::repeat(' ').take(missing));
        result.extend(std::iter::repeat('^').take(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use gxl_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level, Span};
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unexpected character")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::point(0, 3))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_new() {
        let snippet = SourceSnippet::new("a == b", 1, 3, 5, Some("operator"));
        assert_eq!(snippet.line, "a == b");
        assert_eq!(snippet.line_number, 1);
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 5);
        assert_eq!(snippet.label, Some("operator".to_string()));
    }

    #[test]
    fn test_source_snippet_format_caret_position() {
        let snippet = SourceSnippet::new("a == b", 1, 3, 5, Some("here"));
        let formatted = snippet.format();
        let mut lines = formatted.lines();
        assert_eq!(lines.next(), Some("  1 | a == b"));
        assert_eq!(lines.next(), Some("    |   ^^ here"));
    }

    #[test]
    fn test_source_snippet_point_has_single_caret() {
        let formatted = SourceSnippet::point("x $ y", 1, 3).format();
        assert!(formatted.ends_with("|   ^"));
    }

    #[test]
    fn test_source_snippet_keeps_tabs() {
        let formatted = SourceSnippet::point("\tx $", 1, 4).format();
        assert!(formatted.ends_with("| \t  ^"));
    }

    #[test]
    fn test_from_source_picks_line() {
        let snippet = SourceSnippet::from_source("first\nsecond\nthird", 2, 3).unwrap();
        assert_eq!(snippet.line, "second");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 3);
    }

    #[test]
    fn test_from_source_allows_end_of_line() {
        let snippet = SourceSnippet::from_source("\"abc", 1, 5).unwrap();
        assert_eq!(snippet.start_column, 5);
    }

    #[test]
    fn test_from_source_rejects_missing_line() {
        let err = SourceSnippet::from_source("one line", 3, 1).unwrap_err();
        assert_eq!(err, DiagnosticError::InvalidLineNumber { line: 3, max_lines: 1 });
        assert!(SourceSnippet::from_source("one line", 0, 1).is_err());
    }

    #[test]
    fn test_from_source_rejects_far_column() {
        let err = SourceSnippet::from_source("abc", 1, 9).unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::InvalidColumn {
                line: 1,
                column: 9,
                line_len: 3
            }
        );
    }

    #[test]
    fn test_builder_fluent() {
        let snippet = SourceSnippet::point("a $", 1, 3);
        let diag = DiagnosticBuilder::error("unexpected character")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(Span::new(2, 3, 0, 2))
            .note("no token starts with `$`")
            .help("remove it")
            .snippet(snippet)
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.notes, vec!["no token starts with `$`"]);
        assert_eq!(diag.helps, vec!["remove it"]);
        assert_eq!(diag.snippets.len(), 1);
    }

    #[test]
    fn test_builder_warning_renders_without_code() {
        let diag = DiagnosticBuilder::warning("odd spacing").span(Span::point(0, 2)).build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, None);
        assert_eq!(diag.render(), "warning: odd spacing\n --> 1:3\n");
    }
}
