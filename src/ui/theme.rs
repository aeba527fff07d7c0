//! Visual theme and styling.

use console::Style;

/// Report styling.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for header underlines (dim).
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header: `TITLE:` over a rule of the same width.
    pub fn format_header(&self, title: &str) -> String {
        let heading = format!("{}:", title);
        let rule = "=".repeat(heading.chars().count());
        format!(
            "{}\n{}",
            self.header.apply_to(heading),
            self.border.apply_to(rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("Complete"), "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = Theme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = Theme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn header_rule_matches_heading_width() {
        let theme = Theme::plain();
        assert_eq!(theme.format_header("STATUS"), "STATUS:\n=======");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = Theme::new();
        assert!(theme.format_success("done").contains("done"));
    }
}
