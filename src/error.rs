//! Error types for corecheck operations.
//!
//! This module defines [`CoreCheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal: the report is a one-shot run with no retry
//! - Each failure the run can hit has its own `CoreCheckError` variant
//! - Lines the search tool returns without a quoted word are not errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for corecheck operations.
#[derive(Debug, Error)]
pub enum CoreCheckError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The search tool could not be started at all.
    #[error("Could not run '{command}': {message}")]
    ExternalToolUnavailable { command: String, message: String },

    /// The search tool ran but reported an error status.
    #[error("Command failed with {}: {command}{}", status_text(.code), stderr_suffix(.stderr))]
    ExternalToolFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The file handed to the search tool does not exist.
    #[error("Search target not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// The reference word set is empty, so no percentage can be computed.
    #[error("Reference word set is empty")]
    EmptyReference,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" ({})", trimmed)
    }
}

/// Result type alias for corecheck operations.
pub type Result<T> = std::result::Result<T, CoreCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = CoreCheckError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CoreCheckError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn external_tool_failed_includes_stderr() {
        let err = CoreCheckError::ExternalToolFailed {
            command: "grep -o x src/builtins.c".into(),
            code: Some(2),
            stderr: "grep: src/builtins.c: No such file or directory\n".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Command failed with exit code 2: "));
        assert!(!msg.contains("Some("));
        assert!(msg.contains("grep -o x src/builtins.c"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn external_tool_failed_without_stderr_has_no_suffix() {
        let err = CoreCheckError::ExternalToolFailed {
            command: "grep".into(),
            code: None,
            stderr: "  \n".into(),
        };
        assert_eq!(err.to_string(), "Command failed with signal: grep");
    }

    #[test]
    fn external_tool_unavailable_displays_command_and_message() {
        let err = CoreCheckError::ExternalToolUnavailable {
            command: "rg".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'rg'"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn target_not_found_displays_path() {
        let err = CoreCheckError::TargetNotFound {
            path: PathBuf::from("src/builtins.c"),
        };
        assert!(err.to_string().contains("src/builtins.c"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CoreCheckError = io_err.into();
        assert!(matches!(err, CoreCheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CoreCheckError::EmptyReference)
        }
        assert!(returns_error().is_err());
    }
}
