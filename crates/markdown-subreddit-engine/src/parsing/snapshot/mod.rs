//! # Snapshot Support
//!
//! - **`normalize`**: converts scan output into a stable, serializable form
//!   (used for reports and assertions)
//! - **`invariants`**: panicking checks that scan output covers its range
//!   exactly once, in order, with element text equal to the source

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{ItemSnap, LineSnap, Snap, normalize, normalize_items};
