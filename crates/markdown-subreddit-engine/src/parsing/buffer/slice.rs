use super::{range::TextRange, text::TextBuffer};

/// Extracts text for a range, truncating to `max` chars with "..." suffix if needed.
///
/// Used for human-readable snapshot output.
pub fn preview(buf: &TextBuffer, range: TextRange, max: usize) -> String {
    let chars = buf.chars(range);
    if chars.len() <= max {
        return chars.iter().collect();
    }
    let mut s: String = chars[..max].iter().collect();
    s.push_str("...");
    s
}
