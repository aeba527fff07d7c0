//! corecheck - ANSI Forth CORE word set compliance report.
//!
//! corecheck compares the words a Forth interpreter implements against
//! the ANSI CORE word set and prints what is still missing, grouped by
//! category.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Set comparison and report rendering
//! - [`shell`] - External command execution and the search tool
//! - [`source`] - Where the implemented words come from
//! - [`ui`] - Terminal output
//! - [`words`] - Keywords and the built-in word lists
//!
//! # Example
//!
//! ```
//! use corecheck::report::{render, Compliance};
//! use corecheck::config::ReportConfig;
//! use corecheck::source::{LiteralSource, WordSource};
//! use corecheck::ui::MockUI;
//! use corecheck::words::{word_set, CategoryMap, ANSI_CORE_WORDS};
//!
//! let current = LiteralSource::new(["dup", "drop", "swap"]).current_words().unwrap();
//! let report = Compliance::compute(
//!     &word_set(ANSI_CORE_WORDS),
//!     &current,
//!     &CategoryMap::ansi_core(),
//! )
//! .unwrap();
//!
//! let mut ui = MockUI::new();
//! render(&report, &ReportConfig::default(), &mut ui);
//! assert!(ui.has_line_containing("Actual compliance: 3/133 = 2%"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod source;
pub mod ui;
pub mod words;

pub use error::{CoreCheckError, Result};
