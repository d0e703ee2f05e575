use serde::Serialize;

use crate::parsing::buffer::TextRange;

/// A materialized inline element.
///
/// Elements own their text so they can outlive the buffer they were cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum InlineElement {
    /// A bare community reference such as `r/rust` or `/r/rust`.
    ///
    /// `text` is the matched source verbatim, leading `/` included.
    RawSubreddit { text: String },
}

impl InlineElement {
    /// The literal source text this element was built from.
    pub fn text(&self) -> &str {
        match self {
            InlineElement::RawSubreddit { text } => text,
        }
    }
}

/// A span proposed by one recognizer during arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the proposing recognizer in the registry.
    pub recognizer: usize,
    pub range: TextRange,
}

/// An element together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineMatch {
    /// Name of the recognizer that produced the element.
    pub recognizer: &'static str,
    /// Consumed range; starts at the candidate start and ends at the new cursor.
    pub range: TextRange,
    pub element: InlineElement,
}

/// One item of scan output, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScanItem {
    /// Plain text that no recognizer claimed.
    Text(TextRange),
    /// A recognized inline element.
    Inline(InlineMatch),
}

impl ScanItem {
    /// Extracts the range from any item variant.
    pub fn range(&self) -> TextRange {
        match self {
            ScanItem::Text(range) => *range,
            ScanItem::Inline(m) => m.range,
        }
    }
}
