//! Cyclic cursor over a [`Corpus`].

use super::corpus::Corpus;

/// Infinite, deterministic draw over a corpus.
///
/// Each call to [`Cursor::next_token`] returns the token at the current
/// position and advances by one, wrapping to 0 after the last token. A cursor
/// is created once per pass and never reset; it is not meant to be shared.
#[derive(Debug, Clone)]
pub struct Cursor<'c> {
    corpus: &'c Corpus,
    position: usize,
    draws: usize,
    wraps: usize,
}

impl<'c> Cursor<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Cursor { corpus, position: 0, draws: 0, wraps: 0 }
    }

    /// Draw the next replacement token.
    pub fn next_token(&mut self) -> &'c str {
        let corpus: &'c Corpus = self.corpus;
        // `Corpus` is never empty, so `position` is always in range.
        let token = corpus.get(self.position).unwrap_or_default();

        self.draws += 1;
        self.position += 1;
        if self.position == corpus.len() {
            self.position = 0;
            self.wraps += 1;
        }
        token
    }

    /// Index of the token the next draw will return.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of times the cursor has wrapped back to the first token.
    pub fn wraps(&self) -> usize {
        self.wraps
    }
}

impl<'c> Iterator for Cursor<'c> {
    type Item = &'c str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draws_in_order_and_wraps() {
        let corpus = Corpus::from_tokens(["Alpha", "beta", "GAMMA"]).unwrap();
        let mut cursor = corpus.cursor();

        let drawn: Vec<_> = (0..7).map(|_| cursor.next_token()).collect();
        assert_eq!(drawn, vec!["Alpha", "beta", "GAMMA", "Alpha", "beta", "GAMMA", "Alpha"]);
        assert_eq!(cursor.draws(), 7);
        assert_eq!(cursor.wraps(), 2);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn single_token_corpus_repeats() {
        let corpus = Corpus::from_tokens(["Nurd"]).unwrap();
        let drawn: Vec<_> = corpus.cursor().take(3).collect();
        assert_eq!(drawn, vec!["Nurd", "Nurd", "Nurd"]);
    }

    #[test]
    fn fresh_cursors_start_at_zero() {
        let corpus = Corpus::from_tokens(["x", "y"]).unwrap();
        let mut first = corpus.cursor();
        first.next_token();

        let mut second = corpus.cursor();
        assert_eq!(second.position(), 0);
        assert_eq!(second.next_token(), "x");
    }
}
