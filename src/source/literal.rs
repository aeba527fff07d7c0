//! Word source backed by a fixed list.

use crate::error::Result;
use crate::words::{word_set, WordSet, LITERAL_CURRENT_WORDS};

use super::WordSource;

/// Returns a fixed set of words. Never fails.
#[derive(Debug, Clone)]
pub struct LiteralSource {
    words: WordSet,
}

impl LiteralSource {
    /// Create a source from any list of word spellings.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: word_set(words),
        }
    }

    /// The built-in literal list.
    pub fn builtin() -> Self {
        Self::new(LITERAL_CURRENT_WORDS)
    }
}

impl Default for LiteralSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordSource for LiteralSource {
    fn describe(&self) -> String {
        format!("literal list ({} words)", self.words.len())
    }

    fn current_words(&self) -> Result<WordSet> {
        Ok(self.words.clone())
    }
}
