//! Word sources: where the list of implemented words comes from.
//!
//! A [`WordSource`] yields the current [`WordSet`] once per run. Two
//! strategies exist:
//!
//! - [`LiteralSource`] - a fixed list, no external dependency
//! - [`ExtractionSource`] - quoted names pulled from a [`SearchTool`]'s
//!   output over an interpreter source file
//!
//! # Example
//!
//! ```
//! use corecheck::source::{LiteralSource, WordSource};
//! use corecheck::words::Keyword;
//!
//! let source = LiteralSource::new(["dup", "drop"]);
//! let words = source.current_words().unwrap();
//! assert!(words.contains(&Keyword::new("DUP")));
//! ```
//!
//! [`SearchTool`]: crate::shell::SearchTool

pub mod extract;
pub mod literal;

use std::path::Path;

use crate::config::SourceConfig;
use crate::error::Result;
use crate::shell::GrepTool;
use crate::words::WordSet;

pub use extract::{extract_keyword, extract_keywords, ExtractionSource};
pub use literal::LiteralSource;

/// Produces the set of currently implemented words.
pub trait WordSource {
    /// Short human-readable description, for logging.
    fn describe(&self) -> String;

    /// Resolve the current words. Case is folded and duplicates collapse.
    fn current_words(&self) -> Result<WordSet>;
}

/// Build the word source a configuration selects.
///
/// A relative extraction `cwd` is resolved against `project_root`.
pub fn from_config(config: &SourceConfig, project_root: &Path) -> Box<dyn WordSource> {
    match config {
        SourceConfig::Literal { words: None } => Box::new(LiteralSource::builtin()),
        SourceConfig::Literal { words: Some(words) } => Box::new(LiteralSource::new(words)),
        SourceConfig::Extract {
            program,
            pattern,
            path,
            cwd,
        } => {
            let cwd = match cwd {
                Some(dir) => project_root.join(dir),
                None => project_root.to_path_buf(),
            };
            Box::new(ExtractionSource::new(
                GrepTool::new(program, &cwd),
                pattern,
                path,
            ))
        }
    }
}
