//! Configuration validation rules.
//!
//! - Extraction needs a program, a pattern and a path
//! - Custom word lists must not contain blank entries
//! - Custom categories need a name and must not share words

use crate::config::schema::{CategoryConfig, CoreCheckConfig, SourceConfig};
use crate::error::{CoreCheckError, Result};
use crate::words::{Keyword, WordSet};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: &str) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.to_string(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &CoreCheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_source(&config.source));

    if let Some(words) = &config.report.recent_words {
        if words.iter().any(|w| w.trim().is_empty()) {
            errors.push(ValidationError::new(
                "blank-word",
                "report.recent_words contains a blank entry",
            ));
        }
    }

    if let Some(categories) = &config.report.categories {
        errors.extend(validate_categories(categories));
    }

    errors
}

fn validate_categories(categories: &[CategoryConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = WordSet::new();

    for category in categories {
        if category.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "blank-category",
                "report.categories contains a category without a name",
            ));
        }
        for word in &category.words {
            if word.trim().is_empty() {
                errors.push(ValidationError::new(
                    "blank-word",
                    &format!("category '{}' contains a blank entry", category.name),
                ));
            } else if !seen.insert(Keyword::new(word)) {
                errors.push(ValidationError::new(
                    "overlapping-categories",
                    &format!(
                        "'{}' in category '{}' already belongs to another category",
                        word, category.name
                    ),
                ));
            }
        }
    }

    errors
}

fn validate_source(source: &SourceConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match source {
        SourceConfig::Literal { words: Some(words) } => {
            if words.iter().any(|w| w.trim().is_empty()) {
                errors.push(ValidationError::new(
                    "blank-word",
                    "source.words contains a blank entry",
                ));
            }
        }
        SourceConfig::Literal { words: None } => {}
        SourceConfig::Extract {
            program,
            pattern,
            path,
            ..
        } => {
            if program.trim().is_empty() {
                errors.push(ValidationError::new(
                    "empty-program",
                    "source.program must not be empty",
                ));
            }
            if pattern.is_empty() {
                errors.push(ValidationError::new(
                    "empty-pattern",
                    "source.pattern must not be empty",
                ));
            }
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::new(
                    "empty-path",
                    "source.path must not be empty",
                ));
            }
        }
    }

    errors
}

/// Validate configuration, failing on the first batch of errors.
pub fn validate(config: &CoreCheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CoreCheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
