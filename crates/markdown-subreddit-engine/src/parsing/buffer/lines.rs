use xi_rope::Rope;

use super::range::TextRange;

/// Returns an iterator over the char range of each line.
///
/// Uses `lines_raw` so the terminator is still visible while counting offsets;
/// `\n` and a preceding `\r` are then left out of the reported range.
pub fn lines_with_ranges(rope: &Rope) -> impl Iterator<Item = TextRange> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.chars().count();
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        TextRange::from_ordered(start, start + content.chars().count())
    })
}
