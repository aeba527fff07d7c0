//! corecheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use corecheck::cli::{Cli, CommandDispatcher};
use corecheck::ui::{create_ui, TerminalUI, Theme, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so stdout carries only the report
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("corecheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("corecheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("corecheck starting with args: {:?}", cli);

    let mut ui: Box<dyn UserInterface> = if cli.no_color {
        Box::new(TerminalUI::with_theme(Theme::plain()))
    } else {
        create_ui()
    };

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
