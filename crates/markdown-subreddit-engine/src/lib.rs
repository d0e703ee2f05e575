pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{InvariantViolation, RangeError};
pub use parsing::{
    ScannedDoc, ScannedLine,
    buffer::{TextBuffer, TextRange},
    inline::{
        Candidate, InlineElement, InlineMatch, InlineRecognizer, Scan, ScanCoordinator, ScanItem,
        SubredditRecognizer,
    },
    scan_document,
};
