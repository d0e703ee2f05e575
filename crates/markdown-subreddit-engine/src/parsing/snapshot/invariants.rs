use crate::parsing::{
    buffer::{TextBuffer, TextRange},
    inline::ScanItem,
};

/// Asserts that `items` are a lossless, in-order cover of `range`.
pub fn check(buf: &TextBuffer, range: TextRange, items: &[ScanItem]) {
    let mut at = range.start();
    let mut prev_text = false;
    for item in items {
        let r = item.range();
        assert!(
            r.start() == at,
            "gap or overlap at {at}: next item covers {}..{}",
            r.start(),
            r.end()
        );
        assert!(!r.is_empty(), "empty item at {at}");
        assert!(
            range.contains_range(r),
            "item {}..{} extends past range end {}",
            r.start(),
            r.end(),
            range.end()
        );
        match item {
            ScanItem::Text(_) => {
                assert!(!prev_text, "two consecutive text items at {at}");
                prev_text = true;
            }
            ScanItem::Inline(m) => {
                assert_eq!(
                    m.element.text(),
                    buf.slice(r),
                    "element text differs from source at {}..{}",
                    r.start(),
                    r.end()
                );
                prev_text = false;
            }
        }
        at = r.end();
    }
    assert!(
        at == range.end(),
        "items end at {at}, range ends at {}",
        range.end()
    );
}
