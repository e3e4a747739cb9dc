//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Groundwork - Cross-platform environment bootstrap automation.
#[derive(Debug, Parser)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON package manifest with additional packages
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Path to the run log file (defaults to logs/groundwork.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap the host (default if no command specified)
    Bootstrap(BootstrapArgs),

    /// Show the detected platform and resolved package-manager strategy
    Detect(DetectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `bootstrap` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BootstrapArgs {
    /// Virtual environment directory
    #[arg(long, default_value = ".groundwork-venv")]
    pub venv: PathBuf,

    /// Python requirements file installed into the environment
    #[arg(long, default_value = "requirements.txt")]
    pub requirements: PathBuf,

    /// Skip virtual environment creation and Python requirements
    #[arg(long)]
    pub skip_python: bool,

    /// Answer yes to all prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// Preview commands without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for BootstrapArgs {
    fn default() -> Self {
        Self {
            venv: PathBuf::from(".groundwork-venv"),
            requirements: PathBuf::from("requirements.txt"),
            skip_python: false,
            yes: false,
            non_interactive: false,
            dry_run: false,
        }
    }
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
