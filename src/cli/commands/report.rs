//! Report command implementation.
//!
//! Loads configuration, resolves the current words once, compares them
//! against the ANSI CORE set and prints the report.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, CoreCheckConfig};
use crate::error::Result;
use crate::report::{render, Compliance};
use crate::source;
use crate::ui::UserInterface;
use crate::words::{
    word_set, Category, CategoryMap, Keyword, ANSI_CORE_WORDS, RECENT_ADDITIONS,
};

use super::dispatcher::Command;

/// The report command implementation.
pub struct ReportCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
        }
    }

    fn load(&self) -> Result<CoreCheckConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;
        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}

/// Spot-check candidates a configuration asks for, if any.
fn recent_candidates(config: &CoreCheckConfig) -> Option<Vec<Keyword>> {
    if !config.report.recent_additions {
        return None;
    }
    let candidates = match &config.report.recent_words {
        Some(words) => words.iter().map(Keyword::new).collect(),
        None => RECENT_ADDITIONS.iter().map(Keyword::new).collect(),
    };
    Some(candidates)
}

/// Grouping for missing words: the configured categories, or the built-in map.
fn category_map(config: &CoreCheckConfig) -> CategoryMap {
    match &config.report.categories {
        Some(categories) => CategoryMap::new(
            categories
                .iter()
                .map(|c| Category::new(&c.name, &c.words))
                .collect(),
        ),
        None => CategoryMap::ansi_core(),
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let config = self.load()?;

        let source = source::from_config(&config.source, &self.project_root);
        tracing::debug!("Resolving current words from {}", source.describe());
        let current = source.current_words()?;

        let reference = word_set(ANSI_CORE_WORDS);
        let mut report = Compliance::compute(&reference, &current, &category_map(&config))?;
        if let Some(candidates) = recent_candidates(&config) {
            report = report.with_recent_additions(&candidates);
        }

        render(&report, &config.report, ui);

        Ok(())
    }
}
