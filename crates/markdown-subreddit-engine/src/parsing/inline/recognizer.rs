use crate::parsing::buffer::{TextBuffer, TextRange};

use super::types::InlineElement;

/// One inline token shape that can take part in scan arbitration.
///
/// # Contract
///
/// - `try_find_candidate` is pure. The coordinator calls it once per round
///   with a shrinking `best_start`, so it may be called many times per scan.
///   A returned range must start at or after `search_start`, before
///   `best_start`, and end at or before `range_end`; it must not be empty.
/// - `parse` is called exactly once per winning candidate with that same
///   candidate. It returns the element and the new cursor, which must lie in
///   `(candidate.start(), range_end]`.
///
/// Neither operation may read characters at or past `range_end`.
pub trait InlineRecognizer: Send + Sync {
    /// Short stable name used in diagnostics and scan output.
    fn name(&self) -> &'static str;

    /// Proposes the earliest span this recognizer can claim in
    /// `[search_start, range_end)` that starts strictly before `best_start`.
    fn try_find_candidate(
        &self,
        buf: &TextBuffer,
        search_start: usize,
        range_end: usize,
        best_start: usize,
    ) -> Option<TextRange>;

    /// Materializes a candidate previously returned by `try_find_candidate`.
    fn parse(
        &self,
        buf: &TextBuffer,
        candidate: TextRange,
        range_end: usize,
    ) -> (InlineElement, usize);
}
