//! Configuration schema definitions for corecheck.
//!
//! This module contains the struct definitions that map to the
//! `.corecheck/config.yml` file format. Every field has a default, so an
//! empty file (or no file) reproduces the built-in literal report.

use serde::Deserialize;
use std::path::PathBuf;

use crate::source::extract::{DEFAULT_PATH, DEFAULT_PATTERN, DEFAULT_PROGRAM};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CoreCheckConfig {
    /// Where the list of implemented words comes from.
    pub source: SourceConfig,

    /// Report presentation.
    pub report: ReportConfig,
}

/// Word source selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// A fixed list of words.
    Literal {
        /// Words to use instead of the built-in list.
        #[serde(default)]
        words: Option<Vec<String>>,
    },

    /// Words pulled out of an interpreter source file by a search tool.
    Extract {
        /// Search program.
        #[serde(default = "default_program")]
        program: String,

        /// Pattern passed to the search program.
        #[serde(default = "default_pattern")]
        pattern: String,

        /// File to search, relative to `cwd`.
        #[serde(default = "default_path")]
        path: PathBuf,

        /// Working directory for the search (relative to the project root).
        #[serde(default)]
        cwd: Option<PathBuf>,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Literal { words: None }
    }
}

impl SourceConfig {
    /// An extraction source with every default filled in.
    pub fn extract_defaults() -> Self {
        Self::Extract {
            program: default_program(),
            pattern: default_pattern(),
            path: default_path(),
            cwd: None,
        }
    }
}

/// Report presentation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Heading printed above the summary.
    pub title: String,

    /// Print the "other missing" heading even when that bucket is empty.
    pub show_empty_other: bool,

    /// Print the recent-additions spot check at the end.
    pub recent_additions: bool,

    /// Words to spot check instead of the built-in list.
    pub recent_words: Option<Vec<String>>,

    /// Category grouping to use instead of the built-in map.
    pub categories: Option<Vec<CategoryConfig>>,
}

/// One named group of words in a custom category map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryConfig {
    /// Heading printed above the group.
    pub name: String,

    /// Member words; case is folded.
    pub words: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_empty_other: true,
            recent_additions: false,
            recent_words: None,
            categories: None,
        }
    }
}

fn default_title() -> String {
    "ANSI COMPLIANCE REALITY CHECK".to_string()
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_PATH)
}
