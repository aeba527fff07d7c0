//! Presentation groups for missing words.

use super::{Keyword, WordSet};

/// Built-in grouping of the CORE words most likely to be missing.
const ANSI_CORE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Numeric Output", &["#", "#>", "#S", "<#", "SIGN", "HOLD", "U.", "S>D"]),
    ("Dictionary", &["'", ",", "HERE", "ALLOT", ">BODY", ">IN", ">NUMBER", "FIND", "WORD"]),
    ("Comments", &["("]),
    ("Compilation", &[":", ";", "[", "]", "LITERAL", "POSTPONE", "RECURSE", "EXIT"]),
    ("Memory", &["2!", "2@", "2OVER", "CELL+", "CELLS", "ALIGN", "ALIGNED", "FILL", "MOVE"]),
    ("Character", &["CHAR", "CHAR+", "CHARS", "BL", "C,"]),
    ("String/Input", &["ACCEPT", "SPACES", "SOURCE", "ABORT\"", "ENVIRONMENT?"]),
    (
        "Arithmetic",
        &["*/MOD", "LSHIFT", "RSHIFT", "M*", "UM*", "UM/MOD", "SM/REM", "INVERT", "XOR", "U<"],
    ),
    ("System", &["BASE", "DECIMAL", "STATE", "UNLOOP"]),
    ("Advanced", &["[']", "[CHAR]"]),
];

/// A named group of keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Heading printed above the group.
    pub name: String,
    /// Member words, in their curated order.
    pub words: Vec<Keyword>,
}

impl Category {
    /// Create a category from word spellings.
    pub fn new<I, S>(name: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            words: words.into_iter().map(Keyword::new).collect(),
        }
    }
}

/// Ordered category name to word list mapping.
///
/// Used only to group the report. Words belonging to no category are
/// reported in the "other" bucket, so a stale map never hides a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    /// Create a map from categories, keeping their order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The built-in grouping for the ANSI CORE word set.
    pub fn ansi_core() -> Self {
        Self::new(
            ANSI_CORE_CATEGORIES
                .iter()
                .map(|(name, words)| Category::new(name, words.iter()))
                .collect(),
        )
    }

    /// Iterate categories in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Union of every category's words.
    pub fn all_words(&self) -> WordSet {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().cloned())
            .collect()
    }

    /// True when no word appears in more than one category.
    pub fn is_disjoint(&self) -> bool {
        let total: usize = self.categories.iter().map(|c| c.words.len()).sum();
        total == self.all_words().len()
    }

    /// True when every categorized word is in `words`.
    pub fn is_subset_of(&self, words: &WordSet) -> bool {
        self.all_words().is_subset(words)
    }
}
