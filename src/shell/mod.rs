//! External process execution.
//!
//! - [`command`] - run a program and capture its output
//! - [`search`] - the [`SearchTool`] collaborator and its grep implementation

pub mod command;
pub mod search;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use search::{GrepTool, SearchTool};
