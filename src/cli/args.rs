//! CLI argument definitions.
//!
//! Only global behavior is configurable from the command line; what the
//! report contains comes from the config file.

use clap::Parser;
use std::path::PathBuf;

/// corecheck - ANSI Forth CORE word set compliance report.
#[derive(Debug, Default, Parser)]
#[command(name = "corecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .corecheck/config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["corecheck"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.project.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn parses_global_flags() {
        let cli = Cli::try_parse_from([
            "corecheck",
            "--config",
            "check.yml",
            "-p",
            "/src/rforth",
            "--debug",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("check.yml")));
        assert_eq!(cli.project, Some(PathBuf::from("/src/rforth")));
        assert!(cli.debug);
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["corecheck", "extra"]).is_err());
    }
}
