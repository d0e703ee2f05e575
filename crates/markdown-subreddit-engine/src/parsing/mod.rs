pub mod buffer;
pub mod inline;
pub mod snapshot;

use xi_rope::Rope;

use buffer::{TextBuffer, TextRange, lines_with_ranges};
use inline::{ScanCoordinator, ScanItem};

/// Scan output for one line.
#[derive(Debug)]
pub struct ScannedLine {
    pub range: TextRange,
    pub items: Vec<ScanItem>,
}

impl ScannedLine {
    pub fn has_elements(&self) -> bool {
        self.items.iter().any(|i| matches!(i, ScanItem::Inline(_)))
    }
}

#[derive(Debug)]
pub struct ScannedDoc {
    pub buffer: TextBuffer,
    pub lines: Vec<ScannedLine>,
}

/// Convenience: scans every line of `rope` independently.
///
/// Lines stand in for the paragraphs a real block parser would hand over; no
/// element ever spans a line break.
pub fn scan_document(rope: &Rope, coordinator: &ScanCoordinator) -> ScannedDoc {
    let buffer = TextBuffer::from_rope(rope);
    let lines = lines_with_ranges(rope)
        .map(|range| ScannedLine {
            range,
            items: coordinator.scan(&buffer, range).collect(),
        })
        .collect();
    ScannedDoc { buffer, lines }
}
