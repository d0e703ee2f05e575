pub mod lines;
pub mod range;
pub mod slice;
pub mod text;

pub use lines::lines_with_ranges;
pub use range::TextRange;
pub use slice::preview;
pub use text::TextBuffer;
