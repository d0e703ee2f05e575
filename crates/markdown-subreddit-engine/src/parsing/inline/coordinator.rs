use crate::parsing::buffer::{TextBuffer, TextRange};

use super::{
    kinds::SubredditRecognizer,
    recognizer::InlineRecognizer,
    types::{Candidate, InlineMatch, ScanItem},
};

/// Arbitrates between registered recognizers over one range at a time.
///
/// Registration order is priority order: when two recognizers propose the same
/// start offset, the one registered first wins.
#[derive(Default)]
pub struct ScanCoordinator {
    recognizers: Vec<Box<dyn InlineRecognizer>>,
}

impl ScanCoordinator {
    /// A coordinator with no recognizers; every scan yields plain text.
    pub fn new() -> Self {
        Self::default()
    }

    /// A coordinator with every built-in recognizer registered.
    pub fn with_builtin() -> Self {
        Self::new().with(SubredditRecognizer)
    }

    /// Registers `recognizer` after the existing ones.
    pub fn with(mut self, recognizer: impl InlineRecognizer + 'static) -> Self {
        self.register(Box::new(recognizer));
        self
    }

    pub fn register(&mut self, recognizer: Box<dyn InlineRecognizer>) {
        self.recognizers.push(recognizer);
    }

    /// Recognizer names in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Scans `range` of `buf`, lazily yielding plain text and elements in
    /// document order. A range reaching past the buffer is cut at its end.
    pub fn scan<'a>(&'a self, buf: &'a TextBuffer, range: TextRange) -> Scan<'a> {
        let end = range.end().min(buf.len());
        Scan {
            coordinator: self,
            buf,
            cursor: range.start().min(end),
            end,
            pending: None,
            rounds: 0,
        }
    }

    /// Asks every recognizer for a candidate and keeps the earliest start.
    fn arbitrate(&self, buf: &TextBuffer, cursor: usize, end: usize) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for (index, recognizer) in self.recognizers.iter().enumerate() {
            let best_start = best.map_or(end, |c| c.range.start());
            let Some(found) = recognizer.try_find_candidate(buf, cursor, end, best_start) else {
                continue;
            };
            if found.start() < cursor || found.end() > end || found.is_empty() {
                log::warn!(
                    "{}: discarding candidate {}..{} outside scan window {cursor}..{end}",
                    recognizer.name(),
                    found.start(),
                    found.end()
                );
                continue;
            }
            // Strictly earlier only: on a tie the earlier registration keeps it.
            if found.start() < best_start {
                best = Some(Candidate {
                    recognizer: index,
                    range: found,
                });
            }
        }
        best
    }
}

/// A lazy scan over one range. Dropping it abandons the scan.
pub struct Scan<'a> {
    coordinator: &'a ScanCoordinator,
    buf: &'a TextBuffer,
    cursor: usize,
    end: usize,
    /// Element waiting behind the plain text that preceded it.
    pending: Option<ScanItem>,
    rounds: usize,
}

impl Scan<'_> {
    /// Number of arbitration rounds run so far. Never exceeds the range length.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Scan<'_> {
    type Item = ScanItem;

    fn next(&mut self) -> Option<ScanItem> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        if self.cursor >= self.end {
            return None;
        }

        self.rounds += 1;
        let (coordinator, cursor) = (self.coordinator, self.cursor);
        let Some(winner) = coordinator.arbitrate(self.buf, cursor, self.end) else {
            self.cursor = self.end;
            return Some(ScanItem::Text(TextRange::from_ordered(cursor, self.end)));
        };

        let recognizer = &coordinator.recognizers[winner.recognizer];
        let start = winner.range.start();
        let (element, new_end) = recognizer.parse(self.buf, winner.range, self.end);
        let next = if new_end > start && new_end <= self.end {
            new_end
        } else {
            log::error!(
                "{}: parse returned cursor {new_end} outside {}..={}; skipping to range end",
                recognizer.name(),
                start + 1,
                self.end
            );
            self.end
        };
        log::debug!("{} claimed {start}..{next}", recognizer.name());

        self.cursor = next;
        let item = ScanItem::Inline(InlineMatch {
            recognizer: recognizer.name(),
            range: TextRange::from_ordered(start, next),
            element,
        });
        if start > cursor {
            self.pending = Some(item);
            return Some(ScanItem::Text(TextRange::from_ordered(cursor, start)));
        }
        Some(item)
    }
}
