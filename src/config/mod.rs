//! Configuration loading, parsing, and validation for corecheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use corecheck::config::{load_config, validate, SourceConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".corecheck");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "source:\n  kind: extract\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.source, SourceConfig::extract_defaults());
//! ```
//!
//! # Configuration File Location
//!
//! `.corecheck/config.yml` under the project root, or any file passed
//! with `--config`. Without either, the built-in defaults apply.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_config_path, find_project_config, load_config, load_config_file, parse_config,
    CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{CategoryConfig, CoreCheckConfig, ReportConfig, SourceConfig};
pub use validator::{validate, validate_config, ValidationError};
