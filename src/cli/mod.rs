//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{BootstrapArgs, Cli, Commands, CompletionsArgs, DetectArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
