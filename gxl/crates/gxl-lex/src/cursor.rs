//! Character cursor for traversing expression source.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while reading source text one character at a time. It tracks zero-based
//! row/column information for error reporting and keeps a stack of saved
//! snapshots so recognizers can read speculatively and roll back.

use std::ops::{Deref, DerefMut};

use crate::config::LexerConfig;

/// A cursor for traversing source text character by character.
///
/// Rows and columns start at zero. Reading a `'\n'` moves to the next row
/// and resets the column; every other character advances the column by one.
///
/// # Example
///
/// ```
/// use gxl_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
///
/// assert_eq!(cursor.next(), Some('a'));
/// assert_eq!(cursor.next(), Some('\n'));
/// assert_eq!((cursor.row(), cursor.col()), (1, 0));
/// assert_eq!(cursor.peek(), Some('b'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Whitespace classification for this run.
    config: &'a LexerConfig,

    /// Current byte position in the source.
    position: usize,

    /// Current row (0-based).
    row: u32,

    /// Current column (0-based, in characters).
    col: u32,

    /// State before the most recent `next()`, consumed by `undo()`.
    last: Option<CursorSnapshot>,

    /// Snapshots pushed by `save()`.
    saved: Vec<CursorSnapshot>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor using the default whitespace set.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::shared_default())
    }

    /// Creates a new cursor with an explicit configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gxl_lex::{cursor::Cursor, LexerConfig};
    ///
    /// let config = LexerConfig::with_whitespace(['\r']);
    /// let cursor = Cursor::with_config("x", &config);
    /// assert!(cursor.is_whitespace('\r'));
    /// assert!(!cursor.is_whitespace(' '));
    /// ```
    pub fn with_config(source: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            source,
            config,
            position: 0,
            row: 0,
            col: 0,
            last: None,
            saved: Vec::new(),
        }
    }

    /// Returns true if unread characters remain.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.source.len()
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns `None` at the end of the source.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `None` and leaves the cursor untouched at the end of the
    /// source.
    ///
    /// # Example
    ///
    /// ```
    /// use gxl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.next(), Some('a'));
    /// assert_eq!(cursor.col(), 1);
    /// assert_eq!(cursor.next(), Some('b'));
    /// assert_eq!(cursor.next(), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.last = Some(self.snapshot());
        self.position += c.len_utf8();
        if c == '\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }

        Some(c)
    }

    /// Rewinds exactly the character returned by the preceding `next()`.
    ///
    /// Row and column are restored exactly, including across a newline.
    /// Only valid directly after `next()`; any other call in between
    /// (another `undo()`, `save()`, `restore()`) invalidates it.
    ///
    /// # Example
    ///
    /// ```
    /// use gxl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab\nc");
    /// cursor.next();
    /// cursor.next();
    /// cursor.next();
    /// assert_eq!(cursor.row(), 1);
    /// cursor.undo();
    /// assert_eq!((cursor.row(), cursor.col()), (0, 2));
    /// assert_eq!(cursor.peek(), Some('\n'));
    /// ```
    pub fn undo(&mut self) {
        debug_assert!(self.last.is_some(), "undo() without a preceding next()");
        if let Some(previous) = self.last.take() {
            self.apply(previous);
        }
    }

    /// Returns true if `c` is whitespace under the active configuration.
    #[inline]
    pub fn is_whitespace(&self, c: char) -> bool {
        self.config.is_whitespace(c)
    }

    /// Pushes a snapshot of the current state.
    ///
    /// Every `save()` must be matched by exactly one `restore()` or
    /// `discard()`. Prefer [`Cursor::checkpoint`], which pairs them
    /// automatically.
    pub fn save(&mut self) {
        self.last = None;
        self.saved.push(self.snapshot());
    }

    /// Pops the most recent snapshot and moves the cursor back to it.
    ///
    /// Returns false if no snapshot was saved.
    pub fn restore(&mut self) -> bool {
        self.last = None;
        match self.saved.pop() {
            Some(snapshot) => {
                self.apply(snapshot);
                true
            },
            None => false,
        }
    }

    /// Pops the most recent snapshot and keeps the current position.
    ///
    /// Returns false if no snapshot was saved.
    pub fn discard(&mut self) -> bool {
        self.saved.pop().is_some()
    }

    /// Saves the current state and returns a guard owning that snapshot.
    ///
    /// Dropping the guard rolls the cursor back; [`Checkpoint::commit`]
    /// keeps everything read through it. The guard dereferences to the
    /// cursor, so recognizers read through it directly.
    ///
    /// # Example
    ///
    /// ```
    /// use gxl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc");
    /// {
    ///     let mut trial = cursor.checkpoint();
    ///     trial.next();
    ///     trial.next();
    /// }
    /// assert_eq!(cursor.position(), 0);
    ///
    /// let mut trial = cursor.checkpoint();
    /// trial.next();
    /// trial.commit();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    pub fn checkpoint(&mut self) -> Checkpoint<'_, 'a> {
        self.save();
        let depth = self.saved.len();
        Checkpoint {
            cursor: self,
            depth,
            committed: false,
        }
    }

    /// Runs `trial` against the cursor and rolls back afterwards,
    /// whatever the trial returned.
    ///
    /// # Example
    ///
    /// ```
    /// use gxl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("xyz");
    /// let read = cursor.speculate(|c| (c.next(), c.next()));
    /// assert_eq!(read, (Some('x'), Some('y')));
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn speculate<R>(&mut self, trial: impl FnOnce(&mut Cursor<'a>) -> R) -> R {
        let mut checkpoint = self.checkpoint();
        let outcome = trial(&mut *checkpoint);
        drop(checkpoint);
        outcome
    }

    /// Returns the current row (0-based).
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Returns the current column (0-based).
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of snapshots currently saved.
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// Returns the full source text.
    pub fn raw_text(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            row: self.row,
            col: self.col,
        }
    }

    fn apply(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.row = snapshot.row;
        self.col = snapshot.col;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Row (0-based).
    pub row: u32,
    /// Column (0-based).
    pub col: u32,
}

/// Scoped snapshot created by [`Cursor::checkpoint`].
pub struct Checkpoint<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    depth: usize,
    committed: bool,
}

impl Checkpoint<'_, '_> {
    /// Keeps the characters consumed since the checkpoint was taken.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<'a> Deref for Checkpoint<'_, 'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl DerefMut for Checkpoint<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}

impl Drop for Checkpoint<'_, '_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.cursor.saved_depth(),
            self.depth,
            "checkpoints must be released in reverse order"
        );
        if self.committed {
            self.cursor.discard();
        } else {
            self.cursor.restore();
        }
    }
}
