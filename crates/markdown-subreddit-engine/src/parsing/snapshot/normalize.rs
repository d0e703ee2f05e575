use serde::Serialize;

use crate::parsing::{
    ScannedDoc,
    buffer::{TextBuffer, preview},
    inline::ScanItem,
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

#[derive(Debug, Serialize)]
pub struct LineSnap {
    pub number: usize,
    pub range: (usize, usize),
    pub items: Vec<ItemSnap>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSnap {
    pub kind: String,
    pub range: (usize, usize),
    pub text: String,
}

/// Converts scan items to a stable, serializable form.
pub fn normalize_items(buf: &TextBuffer, items: &[ScanItem], max: usize) -> Vec<ItemSnap> {
    items
        .iter()
        .map(|item| {
            let range = item.range();
            let kind = match item {
                ScanItem::Text(_) => "Text".to_string(),
                ScanItem::Inline(m) => m.recognizer.to_string(),
            };
            ItemSnap {
                kind,
                range: (range.start(), range.end()),
                text: preview(buf, range, max),
            }
        })
        .collect()
}

/// Converts a scanned document, keeping only lines that produced elements
/// when `elements_only` is set.
pub fn normalize(doc: &ScannedDoc, max: usize, elements_only: bool) -> Snap {
    let lines = doc
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !elements_only || line.has_elements())
        .map(|(i, line)| LineSnap {
            number: i + 1,
            range: (line.range.start(), line.range.end()),
            items: normalize_items(&doc.buffer, &line.items, max),
        })
        .collect();
    Snap { lines }
}
