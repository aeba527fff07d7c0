//! Text search collaborator used by the extraction word source.

use std::path::{Path, PathBuf};

use crate::error::{CoreCheckError, Result};

use super::command::{display_command, execute, CommandOptions};

/// Something that can return the lines of a file matching a pattern.
///
/// The extraction source depends only on this trait, so tests can hand
/// it canned output instead of spawning a process.
pub trait SearchTool {
    /// Return the matching lines of `path` for `pattern`.
    fn search(&self, pattern: &str, path: &Path) -> Result<Vec<String>>;
}

/// Runs `grep -o -e <pattern> -- <path>` (or a compatible program).
#[derive(Debug, Clone)]
pub struct GrepTool {
    program: String,
    cwd: PathBuf,
}

impl GrepTool {
    /// Exit status grep uses for "ran fine, nothing matched".
    const NO_MATCH_STATUS: i32 = 1;

    /// Create a tool running `program` from `cwd`.
    pub fn new(program: &str, cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            cwd: cwd.to_path_buf(),
        }
    }

}

impl SearchTool for GrepTool {
    fn search(&self, pattern: &str, path: &Path) -> Result<Vec<String>> {
        let target = self.cwd.join(path);
        if !target.exists() {
            return Err(CoreCheckError::TargetNotFound { path: target });
        }

        let path_arg = path.to_string_lossy();
        let args = ["-o", "-e", pattern, "--", &*path_arg];
        let result = execute(&self.program, &args, &CommandOptions::in_dir(&self.cwd))?;

        if result.success {
            return Ok(result.stdout_lines());
        }

        if result.exit_code == Some(Self::NO_MATCH_STATUS) && result.stdout.trim().is_empty() {
            tracing::debug!("{} matched nothing in {}", self.program, target.display());
            return Ok(Vec::new());
        }

        Err(CoreCheckError::ExternalToolFailed {
            command: display_command(&self.program, &args),
            code: result.exit_code,
            stderr: result.stderr,
        })
    }
}
