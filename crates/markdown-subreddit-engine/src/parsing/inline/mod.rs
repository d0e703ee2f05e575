//! # Inline Recognition
//!
//! Competing recognizers claim spans of a range; a coordinator arbitrates.
//!
//! ## Architecture
//!
//! Each round the [`ScanCoordinator`] asks every registered
//! [`InlineRecognizer`] for its earliest candidate at or after the cursor. The
//! best start seen so far is passed along, so later recognizers only look for
//! something strictly earlier. The winner materializes its candidate, text in
//! front of it is emitted as plain text, and the cursor moves past the element.
//!
//! Ties go to the recognizer registered first.
//!
//! ## Modules
//!
//! - **`types`**: `InlineElement`, `Candidate`, `ScanItem`
//! - **`recognizer`**: the `InlineRecognizer` trait (discovery + materialization)
//! - **`kinds`**: concrete recognizers with owned delimiters (`SubredditRecognizer`)
//! - **`cursor`**: bounded `Cursor` for char-by-char scanning
//! - **`coordinator`**: `ScanCoordinator` and the lazy `Scan` iterator
//!
//! ## Termination
//!
//! Every round either ends the scan or advances the cursor by at least one
//! character, so a range of length N takes at most N rounds.

pub mod coordinator;
pub mod cursor;
pub mod kinds;
pub mod recognizer;
pub mod types;

pub use coordinator::{Scan, ScanCoordinator};
pub use kinds::SubredditRecognizer;
pub use recognizer::InlineRecognizer;
pub use types::{Candidate, InlineElement, InlineMatch, ScanItem};
