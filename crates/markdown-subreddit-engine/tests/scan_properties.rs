use markdown_subreddit_engine::{
    InlineElement, InlineRecognizer, ScanCoordinator, ScanItem, SubredditRecognizer, TextBuffer,
    TextRange, parsing::snapshot,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn scan_texts(input: &str) -> Vec<(bool, String)> {
    let buf = TextBuffer::new(input);
    let coordinator = ScanCoordinator::with_builtin();
    let items: Vec<_> = coordinator.scan(&buf, buf.full_range()).collect();
    snapshot::invariants(&buf, buf.full_range(), &items);
    items
        .iter()
        .map(|item| match item {
            ScanItem::Text(r) => (false, buf.slice(*r)),
            ScanItem::Inline(m) => (true, m.element.text().to_string()),
        })
        .collect()
}

fn t(s: &str) -> (bool, String) {
    (false, s.to_string())
}

fn e(s: &str) -> (bool, String) {
    (true, s.to_string())
}

#[rstest]
#[case("foor/bar baz", vec![t("foor/bar baz")])]
#[case("check /r/programming now", vec![t("check "), e("/r/programming"), t(" now")])]
#[case("r/a end", vec![e("r/a"), t(" end")])]
#[case("r/ nothing", vec![t("r/ nothing")])]
#[case("r/x, r/y.", vec![e("r/x"), t(", "), e("r/y"), t(".")])]
#[case("", vec![])]
fn scan_output(#[case] input: &str, #[case] expected: Vec<(bool, String)>) {
    assert_eq!(scan_texts(input), expected);
}

#[test]
fn separator_match_spans_fourteen_chars() {
    let buf = TextBuffer::new("check /r/programming now");
    let items: Vec<_> = ScanCoordinator::with_builtin()
        .scan(&buf, buf.full_range())
        .collect();
    assert_eq!(items[1].range(), TextRange::new(6, 20).unwrap());
    assert_eq!(items[1].range().len(), 14);
    assert_eq!(items[2], ScanItem::Text(TextRange::new(20, 24).unwrap()));
}

#[test]
fn discovery_and_parse_agree_on_every_candidate() {
    let text = include_str!("fixtures/comment_thread.md");
    let buf = TextBuffer::new(text);
    let mut from = 0;
    let mut seen = 0;
    while let Some(c) = SubredditRecognizer.try_find_candidate(&buf, from, buf.len(), buf.len()) {
        let (element, end) = SubredditRecognizer.parse(&buf, c, buf.len());
        assert_eq!(end, c.end());
        assert_eq!(element, InlineElement::RawSubreddit { text: buf.slice(c) });
        from = end;
        seen += 1;
    }
    assert_eq!(seen, 7);
}

#[test]
fn termination_bound_on_long_input() {
    let unit = "foor/bar r/ok /r/x_1 r/ ,r/y";
    let input = unit.repeat(2_000);
    let buf = TextBuffer::new(&input);
    let coordinator = ScanCoordinator::with_builtin();
    let mut scan = coordinator.scan(&buf, buf.full_range());
    let items: Vec<_> = scan.by_ref().collect();
    assert!(scan.rounds() <= buf.len());
    assert_eq!(scan.cursor(), buf.len());
    snapshot::invariants(&buf, buf.full_range(), &items);

    let elements = items
        .iter()
        .filter(|i| matches!(i, ScanItem::Inline(_)))
        .count();
    assert_eq!(elements, 3 * 2_000);
}

#[test]
fn abandoning_a_scan_early_is_fine() {
    let buf = TextBuffer::new("r/a r/b r/c");
    let coordinator = ScanCoordinator::with_builtin();
    let first: Vec<_> = coordinator.scan(&buf, buf.full_range()).take(2).collect();
    assert_eq!(first.len(), 2);
    // A fresh scan starts over; nothing is retained between calls.
    assert_eq!(coordinator.scan(&buf, buf.full_range()).count(), 5);
}

#[test]
fn scans_can_run_on_separate_threads() {
    let coordinator = ScanCoordinator::with_builtin();
    let buf = TextBuffer::new("a r/one\nb r/two\nc r/three");
    let ranges = [
        buf.range(0, 7).unwrap(),
        buf.range(8, 15).unwrap(),
        buf.range(16, 25).unwrap(),
    ];
    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = ranges
            .iter()
            .map(|r| {
                let (coordinator, buf) = (&coordinator, &buf);
                s.spawn(move || coordinator.scan(buf, *r).count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(counts, vec![2, 2, 2]);
}
