use crate::error::InvariantViolation;
use crate::parsing::buffer::{TextBuffer, TextRange};
use crate::parsing::inline::{
    cursor::Cursor, recognizer::InlineRecognizer, types::InlineElement,
};

/// Recognizes bare community references: `r/name` and `/r/name`.
///
/// Only the syntactic shape is checked. The name is whatever run of letters,
/// digits and underscores follows the marker; it must start with a letter or
/// digit.
///
/// Letters are Unicode alphabetic chars; digits are ASCII only, so superscripts
/// and vulgar fractions act as boundaries. Letter-like numerals such as `Ⅻ`
/// count as alphabetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubredditRecognizer;

impl SubredditRecognizer {
    pub const NAME: &'static str = "subreddit";
    /// The marker that introduces a reference.
    pub const MARKER: &'static [char; 2] = &['r', '/'];
    /// Optional leading separator, kept as part of the match.
    pub const SEPARATOR: char = '/';

    fn is_letter_or_digit(c: char) -> bool {
        c.is_alphabetic() || c.is_ascii_digit()
    }

    fn is_name_char(c: char) -> bool {
        Self::is_letter_or_digit(c) || c == '_'
    }

    /// Validates a marker found at `at` and computes its full range.
    ///
    /// `floor` is the lowest offset the match may start at; a separator
    /// sitting below it is left to the text before.
    fn accept(buf: &TextBuffer, at: usize, floor: usize, range_end: usize) -> Option<TextRange> {
        // `foor/bar`: the marker is the tail of a word
        if buf.char_before(at).is_some_and(Self::is_letter_or_digit) {
            return None;
        }

        let mut cur = Cursor::new(buf, at, range_end);
        cur.bump_n(Self::MARKER.len());
        if !cur.peek().is_some_and(Self::is_letter_or_digit) {
            return None;
        }
        cur.eat_while(Self::is_name_char);

        let start = if at > floor && buf.char_before(at) == Some(Self::SEPARATOR) {
            at - 1
        } else {
            at
        };
        Some(TextRange::from_ordered(start, cur.pos()))
    }

    /// Re-derives the end of a match beginning at `start`.
    fn derive_end(buf: &TextBuffer, start: usize, range_end: usize) -> Option<usize> {
        let mut cur = Cursor::new(buf, start, range_end);
        if cur.peek() == Some(Self::SEPARATOR) {
            cur.bump();
        }
        if !cur.starts_with(Self::MARKER) {
            return None;
        }
        cur.bump_n(Self::MARKER.len());
        cur.eat_while(Self::is_name_char);
        Some(cur.pos())
    }

    /// Builds the element for `candidate`, or reports how re-derivation
    /// disagreed with discovery.
    pub(crate) fn materialize(
        buf: &TextBuffer,
        candidate: TextRange,
        range_end: usize,
    ) -> Result<(InlineElement, usize), InvariantViolation> {
        let start = candidate.start();
        match Self::derive_end(buf, start, range_end) {
            Some(end) if end == candidate.end() => {
                let text = buf.slice(TextRange::from_ordered(start, end));
                Ok((InlineElement::RawSubreddit { text }, end))
            }
            derived => Err(InvariantViolation {
                recognizer: Self::NAME,
                candidate,
                derived_end: derived.unwrap_or(start),
            }),
        }
    }
}

impl InlineRecognizer for SubredditRecognizer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn try_find_candidate(
        &self,
        buf: &TextBuffer,
        search_start: usize,
        range_end: usize,
        best_start: usize,
    ) -> Option<TextRange> {
        let mut from = search_start;
        // A false positive does not end the search; a later marker may qualify.
        while let Some(at) = buf.find(Self::MARKER, from, range_end) {
            if at >= best_start {
                break;
            }
            if let Some(range) = Self::accept(buf, at, search_start, range_end) {
                log::trace!("{} candidate at {}..{}", Self::NAME, range.start(), range.end());
                return Some(range);
            }
            from = at + Self::MARKER.len();
        }
        None
    }

    fn parse(
        &self,
        buf: &TextBuffer,
        candidate: TextRange,
        range_end: usize,
    ) -> (InlineElement, usize) {
        Self::materialize(buf, candidate, range_end).unwrap_or_else(|violation| {
            log::error!("{violation}");
            // Consume the rest of the range so the scan still advances.
            let start = candidate.start();
            let rest = TextRange::from_ordered(start, range_end.max(start));
            (
                InlineElement::RawSubreddit {
                    text: buf.slice(rest),
                },
                range_end,
            )
        })
    }
}
