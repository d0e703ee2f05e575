//! # Inline Kinds
//!
//! Concrete recognizers. Each one owns its syntax constants; the coordinator
//! never hardcodes `r/` or any other delimiter.
//!
//! ## Types
//!
//! - **`SubredditRecognizer`**: `MARKER = ['r', '/']`, `SEPARATOR = '/'`

pub mod subreddit;

pub use subreddit::SubredditRecognizer;
