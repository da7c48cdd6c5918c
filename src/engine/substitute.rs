//! The substitution pass.
//!
//! A single left-to-right walk over [`segments`]:
//!
//! ```text
//! Skip(s)      -> push s
//! Token(span)  -> draw = cursor.next_token()
//!                 push CaseClass::of(span.text)?.apply(draw)   (or span.text on failure)
//! ```
//!
//! The cursor is advanced exactly once per token, even when case mapping
//! fails, so token `i` always corresponds to corpus token `i mod len`.

use super::case::CaseClass;
use super::corpus::Corpus;
use super::metrics::{RunMetrics, RunResult};
use super::tokenizer::segments;
use crate::{Segment, TokenFailure, TokenSpan};
use std::time::Instant;

/// What happened to one token during a pass.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    /// The original token.
    pub span: TokenSpan<'a>,
    /// Raw corpus token drawn for it.
    pub draw: &'a str,
    /// Text written to the output.
    pub emitted: &'a str,
    /// Capitalization class of the original, `None` if case mapping failed.
    pub class: Option<CaseClass>,
}

/// Runs substitution passes against a fixed corpus.
///
/// Every call to [`Substituter::run`] starts a fresh cursor at position 0, so
/// runs are independent and reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Substituter<'c> {
    corpus: &'c Corpus,
}

impl<'c> Substituter<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Substituter { corpus }
    }

    /// Transform `input` in one pass.
    pub fn run(&self, input: &str) -> RunResult {
        self.run_observed(input, |_| {})
    }

    /// Transform `input`, reporting every token substitution to `observe` in
    /// document order.
    pub fn run_observed<F>(&self, input: &str, observe: F) -> RunResult
    where
        F: FnMut(&Substitution<'_>),
    {
        self.run_segments(segments(input), input.len(), observe)
    }

    /// Core loop over an already-partitioned text.
    pub(crate) fn run_segments<'s, I, F>(&self, segments: I, size_hint: usize, mut observe: F) -> RunResult
    where
        I: IntoIterator<Item = Segment<'s>>,
        F: FnMut(&Substitution<'_>),
    {
        let start = Instant::now();
        let mut cursor = self.corpus.cursor();
        let mut out = String::with_capacity(size_hint);
        let mut failures = Vec::new();
        let mut skips = 0usize;

        for segment in segments {
            let span = match segment {
                Segment::Skip(s) => {
                    out.push_str(s);
                    skips += 1;
                    continue;
                }
                Segment::Token(span) => span,
            };

            let draw = cursor.next_token();
            match CaseClass::of(span.text) {
                Ok(class) => {
                    let replacement = class.apply(draw);
                    tracing::trace!(start = span.start, original = span.text, draw, replacement = %replacement, "substitute");
                    observe(&Substitution { span, draw, emitted: &replacement, class: Some(class) });
                    out.push_str(&replacement);
                }
                Err(error) => {
                    tracing::warn!(start = span.start, end = span.end, original = span.text, %error, "case mapping failed; keeping original token");
                    observe(&Substitution { span, draw, emitted: span.text, class: None });
                    out.push_str(span.text);
                    failures.push(TokenFailure {
                        start: span.start,
                        end: span.end,
                        original: span.text.to_string(),
                        error,
                    });
                }
            }
        }

        let metrics = RunMetrics {
            total: start.elapsed(),
            tokens: cursor.draws(),
            skips,
            wraps: cursor.wraps(),
            corpus_len: self.corpus.len(),
        };
        tracing::debug!(
            tokens = metrics.tokens,
            skips = metrics.skips,
            wraps = metrics.wraps,
            failures = failures.len(),
            elapsed = ?metrics.total,
            "substitution pass finished"
        );

        RunResult { text: out, metrics, failures }
    }
}
