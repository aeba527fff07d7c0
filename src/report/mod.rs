//! Compliance reporting.
//!
//! [`Compliance::compute`] does the set arithmetic (missing, implemented,
//! percentage, category grouping) and [`render`] writes it out through a
//! [`UserInterface`](crate::ui::UserInterface).
//!
//! # Example
//!
//! ```
//! use corecheck::report::Compliance;
//! use corecheck::words::{word_set, CategoryMap};
//!
//! let reference = word_set(["A", "B", "C"]);
//! let current = word_set(["a"]);
//! let report = Compliance::compute(&reference, &current, &CategoryMap::default()).unwrap();
//! assert_eq!(report.percentage, 33);
//! assert_eq!(report.missing.len(), 2);
//! ```

pub mod compliance;
pub mod render;

pub use compliance::{
    categorize, compliance_percentage, uncategorized, CategoryBreakdown, Compliance,
    RecentAdditions,
};
pub use render::render;
