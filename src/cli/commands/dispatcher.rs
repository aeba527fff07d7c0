//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for running the command a [`Cli`] asks for

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    ///
    /// Any error aborts the run; the caller turns it into a failing exit.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Dispatches CLI invocations to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Dispatch and execute the report command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        let cmd = super::report::ReportCommand::new(&self.project_root, cli.config.clone());
        cmd.execute(ui)
    }
}
