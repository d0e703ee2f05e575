use serde::Serialize;

use crate::error::RangeError;

/// A character range `[start, end)` into a [`TextBuffer`](super::TextBuffer).
///
/// Offsets count `char`s, not bytes. Construction enforces `start <= end`;
/// [`TextBuffer::range`](super::TextBuffer::range) additionally checks the
/// buffer length, so a range obtained from a buffer can always be sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Empty range at `at`.
    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Callers must already have ordered the bounds.
    pub(crate) fn from_ordered(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "unordered range {start}..{end}");
        Self { start, end }
    }

    /// Inclusive start offset.
    pub fn start(self) -> usize {
        self.start
    }

    /// Exclusive end offset.
    pub fn end(self) -> usize {
        self.end
    }

    /// Returns the length in characters.
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns true if the range covers no characters.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// True if `other` lies entirely within this range.
    pub fn contains_range(self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_bounds() {
        let r = TextRange::new(2, 5).unwrap();
        assert_eq!(r.start(), 2);
        assert_eq!(r.end(), 5);
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert_eq!(
            TextRange::new(5, 2),
            Err(RangeError::Inverted { start: 5, end: 2 })
        );
    }

    #[test]
    fn empty_range_has_zero_length() {
        let r = TextRange::empty(7);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn contains_range_checks_both_bounds() {
        let outer = TextRange::new(0, 10).unwrap();
        assert!(outer.contains_range(TextRange::new(0, 10).unwrap()));
        assert!(outer.contains_range(TextRange::new(3, 3).unwrap()));
        assert!(!outer.contains_range(TextRange::new(5, 11).unwrap()));
    }
}
