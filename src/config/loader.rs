//! Configuration file discovery and loading.

use crate::config::schema::CoreCheckConfig;
use crate::error::{CoreCheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".corecheck";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for a project: `.corecheck/config.yml`.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Find the project config, if one exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = default_config_path(project_root);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into [`CoreCheckConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CoreCheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`CoreCheckConfig`].
///
/// Blank content yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<CoreCheckConfig> {
    if content.trim().is_empty() {
        return Ok(CoreCheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CoreCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Without one, the project
/// config is used when present and the built-in defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CoreCheckConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config found, using built-in defaults");
            Ok(CoreCheckConfig::default())
        }
    }
}
