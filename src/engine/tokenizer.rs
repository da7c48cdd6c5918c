//! Word tokenizer.
//!
//! A word is a maximal run of Unicode letters, marks, numbers, underscores,
//! apostrophes or hyphens. Matches are greedy, non-overlapping and scanned
//! left to right, so combining marks stay attached to their base letter and a
//! word is always a single atomic unit.
//!
//! Two views are offered over the same scan:
//!
//! ```text
//! "Hello, WORLD!"
//!  tokens():   [0..5 "Hello"]        [7..12 "WORLD"]
//!  segments(): Token("Hello") Skip(", ") Token("WORLD") Skip("!")
//! ```
//!
//! Both iterators are lazy and finite. They borrow the text, so the sequence
//! can be re-derived at any time by calling the function again.

use crate::{Segment, TokenSpan};
use regex::{Matches, Regex};

/// The compiled word pattern, shared by corpus extraction and input scanning.
pub(crate) fn word_pattern() -> &'static Regex {
    regex!(r"[\p{L}\p{M}\p{N}_'\-]+")
}

/// Lazily yield every word of `text` in document order.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { matches: word_pattern().find_iter(text) }
}

/// Lazily partition `text` into alternating skip and token segments.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, matches: word_pattern().find_iter(text), cursor: 0, pending: None }
}

/// Iterator returned by [`tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = TokenSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| TokenSpan { start: m.start(), end: m.end(), text: m.as_str() })
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug)]
pub struct Segments<'a> {
    text: &'a str,
    matches: Matches<'static, 'a>,
    /// End of the last emitted segment.
    cursor: usize,
    /// A token found after a gap; emitted once the gap has been yielded.
    pending: Option<TokenSpan<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        if let Some(span) = self.pending.take() {
            self.cursor = span.end;
            return Some(Segment::Token(span));
        }

        match self.matches.next() {
            Some(m) => {
                let span = TokenSpan { start: m.start(), end: m.end(), text: m.as_str() };
                if span.start > self.cursor {
                    let gap = &text[self.cursor..span.start];
                    self.pending = Some(span);
                    self.cursor = span.start;
                    Some(Segment::Skip(gap))
                } else {
                    self.cursor = span.end;
                    Some(Segment::Token(span))
                }
            }
            None if self.cursor < text.len() => {
                let tail = &text[self.cursor..];
                self.cursor = text.len();
                Some(Segment::Skip(tail))
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(text: &str) -> Vec<&str> {
        tokens(text).map(|t| t.text).collect()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(words("Hello, WORLD! 123?"), vec!["Hello", "WORLD", "123"]);
    }

    #[test]
    fn keeps_hyphens_apostrophes_and_underscores_inside_words() {
        assert_eq!(words("don't stop scienca-lorem snake_case"), vec!["don't", "stop", "scienca-lorem", "snake_case"]);
    }

    #[test]
    fn em_dash_is_a_separator() {
        assert_eq!(words("reactio—NurdRage"), vec!["reactio", "NurdRage"]);
    }

    #[test]
    fn combining_marks_stay_in_one_token() {
        // "e" + COMBINING ACUTE ACCENT
        let text = "cafe\u{301} noir";
        let spans: Vec<_> = tokens(text).collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "cafe\u{301}");
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, "cafe\u{301}".len());
    }

    #[test]
    fn non_latin_scripts_and_numbers_are_words() {
        assert_eq!(words("Привет мир ½ ٣٤"), vec!["Привет", "мир", "½", "٣٤"]);
    }

    #[test]
    fn segments_alternate_in_document_order() {
        let segs: Vec<_> = segments("  Hi, there!").collect();
        assert_eq!(
            segs,
            vec![
                Segment::Skip("  "),
                Segment::Token(TokenSpan { start: 2, end: 4, text: "Hi" }),
                Segment::Skip(", "),
                Segment::Token(TokenSpan { start: 6, end: 11, text: "there" }),
                Segment::Skip("!"),
            ]
        );
    }

    #[test]
    fn segments_of_tokenless_text_is_one_skip() {
        let segs: Vec<_> = segments("   ...  ").collect();
        assert_eq!(segs, vec![Segment::Skip("   ...  ")]);
    }

    #[test]
    fn segments_of_empty_text_is_empty() {
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn segments_are_rederivable() {
        let text = "one, two\nthree";
        let first: Vec<_> = segments(text).collect();
        let second: Vec<_> = segments(text).collect();
        assert_eq!(first, second);
    }
}
