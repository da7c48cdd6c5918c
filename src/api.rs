use crate::engine::{CaseClass, Corpus, RunMetrics, Substituter};
use crate::{NURDSEM_TEXT, TokenFailure, TransformError};
use once_cell::sync::Lazy;

static DEFAULT_CORPUS: Lazy<Result<Corpus, TransformError>> =
    Lazy::new(|| Corpus::from_text(NURDSEM_TEXT).map_err(TransformError::from));

/// The corpus built from [`NURDSEM_TEXT`], extracted once per process.
pub fn default_corpus() -> Result<&'static Corpus, TransformError> {
    match &*DEFAULT_CORPUS {
        Ok(corpus) => Ok(corpus),
        Err(err) => Err(err.clone()),
    }
}

/// Options for [`transform_verbose_with`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Record a per-token trace in the report (capped at [`Options::TRACE_LIMIT`]).
    pub trace_tokens: bool,
}

impl Options {
    /// Maximum number of entries kept in [`TransformReport::trace`].
    pub const TRACE_LIMIT: usize = 64;
}

/// One traced substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTrace {
    /// Start byte index of the original token.
    pub start: usize,
    /// End byte index of the original token (exclusive).
    pub end: usize,
    pub original: String,
    /// Raw corpus token drawn for this position.
    pub draw: String,
    /// What was written to the output.
    pub emitted: String,
    /// `None` when case mapping failed and the original was kept.
    pub class: Option<CaseClass>,
}

/// Result from [`transform_verbose_with`].
///
/// Pass timing lives in [`RunMetrics::total`].
#[derive(Debug, Clone)]
pub struct TransformReport {
    /// The transformed text.
    pub text: String,
    /// Counts and timing for the pass.
    pub metrics: RunMetrics,
    /// Tokens kept unchanged because their case could not be mapped.
    pub failures: Vec<TokenFailure>,
    /// Per-token trace, empty unless [`Options::trace_tokens`] was set.
    pub trace: Vec<TokenTrace>,
}

/// Transform `input` with the built-in placeholder corpus.
///
/// # Example
/// ```
/// let out = nurdsem::transform("Hello, WORLD!").unwrap();
/// assert_eq!(out, "Experimento, ACIDUS!");
/// ```
pub fn transform(input: &str) -> Result<String, TransformError> {
    let corpus = default_corpus()?;
    Ok(Substituter::new(corpus).run(input).text)
}

/// Transform `input` with a corpus extracted from `corpus_text`.
///
/// Fails only when `corpus_text` contains no words; in that case nothing is
/// substituted.
///
/// # Example
/// ```
/// let out = nurdsem::transform_with("Hello WORLD 123!", "Alpha beta GAMMA").unwrap();
/// assert_eq!(out, "Alpha BETA gamma!");
/// ```
pub fn transform_with(input: &str, corpus_text: &str) -> Result<String, TransformError> {
    let corpus = Corpus::from_text(corpus_text)?;
    Ok(Substituter::new(&corpus).run(input).text)
}

/// Transform `input` with `corpus` and return counts, soft failures and an
/// optional token trace alongside the text.
pub fn transform_verbose_with(input: &str, corpus: &Corpus, options: &Options) -> TransformReport {
    let mut trace = Vec::new();
    let run = Substituter::new(corpus).run_observed(input, |s| {
        if options.trace_tokens && trace.len() < Options::TRACE_LIMIT {
            trace.push(TokenTrace {
                start: s.span.start,
                end: s.span.end,
                original: s.span.text.to_string(),
                draw: s.draw.to_string(),
                emitted: s.emitted.to_string(),
                class: s.class,
            });
        }
    });

    TransformReport { text: run.text, metrics: run.metrics, failures: run.failures, trace }
}
