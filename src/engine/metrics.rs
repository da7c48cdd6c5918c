//! Pass metrics.
//!
//! Counts and timing collected by [`Substituter::run`](super::Substituter::run).
//! They are cheap to gather, so every run collects them; the binary only
//! prints them in verbose mode.

use crate::TokenFailure;
use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Elapsed time for the whole pass.
    pub total: Duration,
    /// Word tokens replaced (one cursor draw each).
    pub tokens: usize,
    /// Skip segments copied verbatim.
    pub skips: usize,
    /// Times the cursor wrapped back to the first corpus token.
    pub wraps: usize,
    /// Number of tokens in the corpus driving the pass.
    pub corpus_len: usize,
}

/// Output of a single pass.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Transformed text.
    pub text: String,
    /// Counts and timing for the pass.
    pub metrics: RunMetrics,
    /// Tokens whose case mapping failed and were emitted unchanged.
    pub failures: Vec<TokenFailure>,
}
