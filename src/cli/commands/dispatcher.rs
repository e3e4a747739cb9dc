//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{BootstrapArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    log_file: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher writing the run log to the given path.
    pub fn new(log_file: PathBuf) -> Self {
        Self { log_file }
    }

    /// Get the run log path.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Bootstrap(args)) => {
                let cmd = super::bootstrap::BootstrapCommand::new(
                    args.clone(),
                    cli.manifest.clone(),
                    self.log_file.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Detect(args)) => {
                let cmd = super::detect::DetectCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to bootstrap with default args
                let cmd = super::bootstrap::BootstrapCommand::new(
                    BootstrapArgs::default(),
                    cli.manifest.clone(),
                    self.log_file.clone(),
                );
                cmd.execute(ui)
            }
        }
    }
}
