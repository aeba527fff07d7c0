//! Case-folded keyword values.

use std::collections::BTreeSet;
use std::fmt;

/// A single Forth word name, stored uppercased.
///
/// Two keywords are equal when their uppercased spellings are identical;
/// nothing else about the token is parsed or validated. Ordering is plain
/// byte-wise string ordering, which is the order reports print in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Create a keyword, folding it to uppercase.
    pub fn new(word: impl AsRef<str>) -> Self {
        Self(word.as_ref().to_uppercase())
    }

    /// The uppercased spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Keyword {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl From<String> for Keyword {
    fn from(word: String) -> Self {
        Self::new(word)
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A set of keywords with duplicates collapsed and sorted iteration.
pub type WordSet = BTreeSet<Keyword>;

/// Build a [`WordSet`] from anything yielding word spellings.
pub fn word_set<I, S>(words: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(Keyword::new).collect()
}
