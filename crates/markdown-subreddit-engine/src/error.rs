use thiserror::Error;

use crate::parsing::buffer::TextRange;

/// Errors from constructing a [`TextRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range start {start} is after its end {end}")]
    Inverted { start: usize, end: usize },

    #[error("range end {end} is beyond the buffer length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// A recognizer's materialization disagreed with its own earlier discovery.
///
/// Never returned to callers: it is reported through the log as a critical,
/// non-fatal diagnostic and the scan recovers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{recognizer}: materialized end {derived_end} does not match candidate {}..{}",
    .candidate.start(),
    .candidate.end()
)]
pub struct InvariantViolation {
    pub recognizer: &'static str,
    pub candidate: TextRange,
    pub derived_end: usize,
}
