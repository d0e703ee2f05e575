use xi_rope::Rope;

use super::range::TextRange;
use crate::error::RangeError;

/// An immutable, char-indexed view of a document.
///
/// Every offset handed to recognizers is an index into `chars`, so per-character
/// classification never has to worry about UTF-8 boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    /// Builds a buffer from a string slice.
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }

    /// Builds a buffer from the whole rope.
    pub fn from_rope(rope: &Rope) -> Self {
        Self::new(&rope.slice_to_cow(..))
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `offset`, if any.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Character immediately before `offset`, if any.
    pub fn char_before(&self, offset: usize) -> Option<char> {
        offset.checked_sub(1).and_then(|i| self.char_at(i))
    }

    /// Creates a range checked against this buffer's length.
    pub fn range(&self, start: usize, end: usize) -> Result<TextRange, RangeError> {
        let range = TextRange::new(start, end)?;
        if end > self.len() {
            return Err(RangeError::OutOfBounds {
                end,
                len: self.len(),
            });
        }
        Ok(range)
    }

    /// The range covering the whole buffer.
    pub fn full_range(&self) -> TextRange {
        TextRange::from_ordered(0, self.len())
    }

    /// Characters within `range`. Out-of-bounds parts are cut off.
    pub fn chars(&self, range: TextRange) -> &[char] {
        let end = range.end().min(self.len());
        let start = range.start().min(end);
        &self.chars[start..end]
    }

    /// Extracts the text for a range as an owned String.
    pub fn slice(&self, range: TextRange) -> String {
        self.chars(range).iter().collect()
    }

    /// Finds the first occurrence of `pat` starting at or after `from` that
    /// ends at or before `to`.
    pub fn find(&self, pat: &[char], from: usize, to: usize) -> Option<usize> {
        let to = to.min(self.len());
        if pat.is_empty() || from >= to || to - from < pat.len() {
            return None;
        }
        self.chars[from..to]
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|i| from + i)
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&Rope> for TextBuffer {
    fn from(rope: &Rope) -> Self {
        Self::from_rope(rope)
    }
}
