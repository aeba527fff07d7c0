//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands. The
//! [`CommandDispatcher`] picks the command to run.

pub mod dispatcher;
pub mod report;

pub use dispatcher::{Command, CommandDispatcher};
pub use report::ReportCommand;
