//! Set arithmetic behind the compliance report.

use crate::error::{CoreCheckError, Result};
use crate::words::{CategoryMap, Keyword, WordSet};

/// Missing words that fall in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    /// Category name.
    pub name: String,
    /// Missing members, sorted.
    pub words: Vec<Keyword>,
}

/// Which spot-check words are implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAdditions {
    /// Number of candidates checked.
    pub checked: usize,
    /// Candidates found among the implemented words, in candidate order.
    pub working: Vec<Keyword>,
}

/// Comparison of the current words against the reference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compliance {
    /// Size of the current word set.
    pub current_count: usize,
    /// Size of the reference word set.
    pub reference_count: usize,
    /// Reference words that are implemented.
    pub implemented: WordSet,
    /// Reference words that are not implemented.
    pub missing: WordSet,
    /// `100 * implemented / reference`, truncated.
    pub percentage: usize,
    /// Non-empty category groups of missing words, in map order.
    pub categories: Vec<CategoryBreakdown>,
    /// Missing words that belong to no category, sorted.
    pub other: Vec<Keyword>,
    /// Spot-check results, when requested.
    pub recent: Option<RecentAdditions>,
}

impl Compliance {
    /// Compare `current` against `reference` and group what is missing.
    ///
    /// # Errors
    ///
    /// Returns `EmptyReference` if `reference` is empty.
    pub fn compute(
        reference: &WordSet,
        current: &WordSet,
        categories: &CategoryMap,
    ) -> Result<Self> {
        let implemented: WordSet = reference.intersection(current).cloned().collect();
        let missing: WordSet = reference.difference(current).cloned().collect();
        let percentage = compliance_percentage(implemented.len(), reference.len())?;

        Ok(Self {
            current_count: current.len(),
            reference_count: reference.len(),
            categories: categorize(&missing, categories),
            other: uncategorized(&missing, categories),
            implemented,
            missing,
            percentage,
            recent: None,
        })
    }

    /// Attach a spot check of `candidates` against the implemented words.
    pub fn with_recent_additions(mut self, candidates: &[Keyword]) -> Self {
        let working = candidates
            .iter()
            .filter(|w| self.implemented.contains(*w))
            .cloned()
            .collect();
        self.recent = Some(RecentAdditions {
            checked: candidates.len(),
            working,
        });
        self
    }

    /// True when every reference word is implemented.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Integer percentage of `implemented` out of `reference`, truncated.
///
/// # Errors
///
/// Returns `EmptyReference` when `reference` is zero.
pub fn compliance_percentage(implemented: usize, reference: usize) -> Result<usize> {
    if reference == 0 {
        return Err(CoreCheckError::EmptyReference);
    }
    Ok(100 * implemented / reference)
}

/// Group `missing` by category, dropping categories with nothing missing.
pub fn categorize(missing: &WordSet, categories: &CategoryMap) -> Vec<CategoryBreakdown> {
    categories
        .iter()
        .filter_map(|category| {
            let words: WordSet = category
                .words
                .iter()
                .filter(|w| missing.contains(*w))
                .cloned()
                .collect();
            if words.is_empty() {
                None
            } else {
                Some(CategoryBreakdown {
                    name: category.name.clone(),
                    words: words.into_iter().collect(),
                })
            }
        })
        .collect()
}

/// Missing words that appear in no category, sorted.
pub fn uncategorized(missing: &WordSet, categories: &CategoryMap) -> Vec<Keyword> {
    let categorized = categories.all_words();
    missing.difference(&categorized).cloned().collect()
}
