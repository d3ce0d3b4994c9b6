//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the row and column the range starts
//! at. Rows and columns are zero-based, exactly as the lexer cursor counts
//! them; conversion to the 1-based numbers shown to humans happens when a
//! diagnostic snippet is built.
//!
//! # Examples
//!
//! ```
//! use gxl_util::span::Span;
//!
//! let span = Span::new(4, 9, 0, 4);
//! assert_eq!(span.len(), 5);
//! ```

use serde::Serialize;

/// Source location span
///
/// # Examples
///
/// ```
/// use gxl_util::span::Span;
///
/// // Create a span with byte offsets and row/column info
/// let span = Span::new(10, 20, 1, 5);
///
/// // Create a point span (single location)
/// let point = Span::point(1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Row of the first character (0-based)
    pub line: u32,
    /// Column of the first character (0-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use gxl_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Row (0-based)
    /// * `column` - Column (0-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use gxl_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Slice the covered text out of `source`
    ///
    /// Returns `None` when the span does not describe a valid range of
    /// `source`.
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}
