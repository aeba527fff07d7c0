//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] capturing output in tests
//!
//! # Example
//!
//! ```
//! use corecheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("ANSI COMPLIANCE REALITY CHECK");
//! ui.success("Nothing missing");
//! assert_eq!(ui.successes().len(), 1);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for writing the report.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);
}
