use crate::parsing::buffer::TextBuffer;

/// A cursor for character-by-character scanning with a hard upper bound.
///
/// The bound is the end of the range being scanned; the cursor never reads a
/// character at or past it, even when the buffer continues.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The buffer being scanned.
    pub buf: &'a TextBuffer,
    /// Current absolute char offset.
    pub i: usize,
    /// Exclusive upper bound (clamped to the buffer length).
    pub end: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at `at` that stops at `end`.
    pub fn new(buf: &'a TextBuffer, at: usize, end: usize) -> Self {
        Self {
            buf,
            i: at,
            end: end.min(buf.len()),
        }
    }

    /// Returns the current absolute position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at the bound.
    pub fn eof(&self) -> bool {
        self.i >= self.end
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        if self.eof() {
            return None;
        }
        self.buf.char_at(self.i)
    }

    /// Checks if the remaining input (before the bound) starts with `pat`.
    pub fn starts_with(&self, pat: &[char]) -> bool {
        self.i + pat.len() <= self.end
            && pat
                .iter()
                .enumerate()
                .all(|(k, c)| self.buf.char_at(self.i + k) == Some(*c))
    }

    /// Advances by one char, returning the consumed char.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += 1;
        Some(c)
    }

    /// Advances by `n` chars, stopping at the bound.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.end.max(self.i));
    }

    /// Advances while `pred` holds, returning how many chars were consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let from = self.i;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.i += 1;
        }
        self.i - from
    }
}
