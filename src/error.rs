//! Core error taxonomy.
//!
//! The core knows exactly two kinds of failure:
//!
//! - [`ConfigurationError`]: the corpus is unusable. Fatal; raised before any
//!   substitution is attempted.
//! - [`TokenCaseError`]: case inspection failed for one token. Recovered
//!   locally by emitting the original token; never aborts a pass.
//!
//! I/O, prompting and argument errors belong to [`crate::app::AppError`].

use thiserror::Error;

/// The placeholder corpus cannot drive substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no words were found in the placeholder text")]
    EmptyCorpus,
    #[error("placeholder token #{index} is empty")]
    EmptyToken { index: usize },
    #[error("placeholder token #{index} ({token:?}) is not a single word")]
    NotAWord { index: usize, token: String },
}

/// Per-token failure while computing or applying a capitalization class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenCaseError {
    #[error("cannot classify an empty token")]
    EmptyToken,
}

/// Error returned by the `transform*` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("error processing placeholder text: {0}")]
    Configuration(#[from] ConfigurationError),
}
