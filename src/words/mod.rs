//! Keyword values and the fixed word lists the report is built from.
//!
//! - [`Keyword`] / [`WordSet`] - case-folded word names and sets of them
//! - [`CategoryMap`] - presentation groups for missing words
//! - [`reference`] - the ANSI CORE list and other built-in lists

pub mod category;
pub mod keyword;
pub mod reference;

pub use category::{Category, CategoryMap};
pub use keyword::{word_set, Keyword, WordSet};
pub use reference::{ANSI_CORE_WORDS, LITERAL_CURRENT_WORDS, RECENT_ADDITIONS};
