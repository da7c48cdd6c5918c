//! Placeholder corpus.
//!
//! The corpus is built once from a placeholder text with the same tokenizer
//! used for input, and is immutable afterwards. It is guaranteed non-empty
//! and every token is exactly one word, so [`Cursor`] never runs dry and each
//! draw emits exactly one word.

use super::cursor::Cursor;
use super::tokenizer::{tokens, word_pattern};
use crate::ConfigurationError;

/// An ordered, non-empty sequence of replacement tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    tokens: Vec<String>,
}

impl Corpus {
    /// Extract the corpus from a placeholder text.
    pub fn from_text(text: &str) -> Result<Self, ConfigurationError> {
        Self::from_tokens(tokens(text).map(|t| t.text))
    }

    /// Build a corpus from tokens that are already split.
    ///
    /// Tokens are used as given (no re-tokenization), so each one must be
    /// exactly one word as the tokenizer would extract it.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(ConfigurationError::EmptyCorpus);
        }
        for (index, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(ConfigurationError::EmptyToken { index });
            }
            if !is_single_word(token) {
                return Err(ConfigurationError::NotAWord { index, token: token.clone() });
            }
        }

        tracing::debug!(tokens = tokens.len(), "built placeholder corpus");
        Ok(Corpus { tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// A fresh cursor positioned at the first token.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}

fn is_single_word(token: &str) -> bool {
    word_pattern().find(token).is_some_and(|m| m.start() == 0 && m.end() == token.len())
}
