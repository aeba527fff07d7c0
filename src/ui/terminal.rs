//! Terminal output.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Writes report lines to stdout and errors to stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }
}

/// Create the UI for this process.
pub fn create_ui() -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new())
}
