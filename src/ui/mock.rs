//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use corecheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Report");
//! ui.message("Missing words: 3");
//!
//! assert!(ui.headers().contains(&"Report".to_string()));
//! assert_eq!(ui.lines(), &["Report", "Missing words: 3"]);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
///
/// Each kind of output is kept in its own list, and `lines` keeps every
/// call's text in call order.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    lines: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every captured line, in the order it was written.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Position of the first line equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines.iter().position(|l| l == line)
    }

    /// Check if any line contains the given text.
    pub fn has_line_containing(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }

    fn record(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record(msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(msg);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record(title);
    }
}
