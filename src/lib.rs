#[macro_use]
mod macros;
mod api;
pub mod app;
mod engine;
mod error;
mod placeholder;

pub use api::{Options, TokenTrace, TransformReport, default_corpus, transform, transform_verbose_with, transform_with};
pub use engine::{
    CaseClass, Corpus, Cursor, RunMetrics, RunResult, Segments, Substituter, Substitution, Tokens, apply_case, segments,
    tokens,
};
pub use error::{ConfigurationError, TokenCaseError, TransformError};
pub use placeholder::NURDSEM_TEXT;

// --- Spans ------------------------------------------------------------------

/// A maximal run of word characters inside the scanned text.
///
/// `start`/`end` are byte offsets into the original input (end exclusive);
/// `text` is the matched slice and is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// One piece of the document-order partition of a text.
///
/// Concatenating the text of every segment reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Material outside the word class, copied through unchanged.
    Skip(&'a str),
    /// A word to be replaced.
    Token(TokenSpan<'a>),
}

impl<'a> Segment<'a> {
    /// The slice of input covered by this segment.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Skip(s) => s,
            Segment::Token(span) => span.text,
        }
    }
}

/// Soft failure recorded when a token's case could not be mapped.
///
/// The token was emitted unchanged and the pass carried on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFailure {
    pub start: usize,
    pub end: usize,
    pub original: String,
    pub error: TokenCaseError,
}
