//! Byte cursor with line tracking.
//!
//! The cursor owns the scanning position over an immutable byte buffer. Every consumed newline
//! bumps the row and moves the start of the current line, so a location can be derived at any
//! point in O(1).

use memchr::{memchr, memchr_iter, memmem, memrchr};


/// Returns `true` if `b` is considered whitespace.
///
/// This is the C locale `isspace` set: space, `\t`, `\n`, `\x0B`, `\x0C` and `\r`.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// A saved scanning position. See [`Lexer::save`](crate::Lexer::save).
///
/// Restoring a state reproduces subsequent scanning exactly. It does not roll back diagnostics
/// that were emitted in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexerState {
    pos: usize,
    line_start: usize,
    row: usize,
}

impl LexerState {
    /// The byte offset of the cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The byte offset of the start of the current line.
    #[inline]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// The zero-based line counter.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Byte cursor over a source buffer.
///
/// Invariant: `line_start <= pos <= src.len()`.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
    line_start: usize,
    row: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `src`.
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0, line_start: 0, row: 0 }
    }

    /// Returns the whole source buffer.
    #[inline]
    pub fn src(&self) -> &'a [u8] {
        self.src
    }

    /// Returns the unconsumed part of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }

    /// Returns the byte offset of the cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the 1-based line number of the cursor.
    #[inline]
    pub fn line(&self) -> usize {
        self.row + 1
    }

    /// Returns the 1-based byte column of the cursor.
    #[inline]
    pub fn column(&self) -> usize {
        self.pos - self.line_start + 1
    }

    /// Checks if there is nothing more to consume.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Peeks the next byte without consuming it.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Returns `true` if the unconsumed input starts with `prefix`.
    ///
    /// A prefix longer than the remaining input never matches.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes one byte, returning it, or `None` at end of input.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.first()?;
        self.pos += 1;
        if b == b'\n' {
            self.row += 1;
            self.line_start = self.pos;
        }
        Some(b)
    }

    /// Consumes up to `n` bytes, stopping early at end of input. Returns the consumed bytes.
    pub fn bump_n(&mut self, n: usize) -> &'a [u8] {
        let start = self.pos;
        let end = start.saturating_add(n).min(self.src.len());
        let eaten = &self.src[start..end];
        if let Some(last) = memrchr(b'\n', eaten) {
            self.row += memchr_iter(b'\n', eaten).count();
            self.line_start = start + last + 1;
        }
        self.pos = end;
        eaten
    }

    /// Eats bytes while `predicate` returns `true` or until the end of input is reached.
    /// Returns the consumed bytes.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> &'a [u8] {
        let len = self.rest().iter().position(|&b| !predicate(b)).unwrap_or(self.rest().len());
        self.bump_n(len)
    }

    /// Eats whitespace. See [`is_whitespace`].
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Eats bytes up to and including the next newline, or to the end of input.
    pub fn eat_line(&mut self) {
        let len = match memchr(b'\n', self.rest()) {
            Some(index) => index + 1,
            None => self.rest().len(),
        };
        self.bump_n(len);
    }

    /// Eats bytes until `needle` is at the cursor, or to the end of input.
    ///
    /// Returns `true` if `needle` was found. The needle itself is not consumed.
    pub fn eat_until(&mut self, needle: &[u8]) -> bool {
        match memmem::find(self.rest(), needle) {
            Some(index) => {
                self.bump_n(index);
                true
            }
            None => {
                self.bump_n(self.rest().len());
                false
            }
        }
    }

    /// Returns the current scanning state.
    #[inline]
    pub fn state(&self) -> LexerState {
        LexerState { pos: self.pos, line_start: self.line_start, row: self.row }
    }

    /// Restores a state previously returned by [`state`](Self::state) on a cursor over the same
    /// buffer.
    #[inline]
    pub fn set_state(&mut self, state: LexerState) {
        debug_assert!(state.line_start <= state.pos && state.pos <= self.src.len(), "{state:?}");
        let LexerState { pos, line_start, row } = state;
        self.pos = pos.min(self.src.len());
        self.line_start = line_start.min(self.pos);
        self.row = row;
    }
}
