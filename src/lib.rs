//! Groundwork - Cross-platform environment bootstrap automation.
//!
//! Groundwork prepares a machine for running a catalog of third-party
//! tools: it detects the host platform, resolves the native
//! package-manager strategy, installs required system packages with
//! per-package fallback chains, and provisions a Python virtual
//! environment.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Sequential package installer loop
//! - [`manifest`] - Core package lists and the optional JSON manifest
//! - [`platform`] - Platform detection probe table
//! - [`python`] - Virtual environment creation and pip requirements
//! - [`shell`] - Shell command execution and executable lookup
//! - [`strategy`] - Package-manager strategy selection
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use groundwork::platform::PlatformProfile;
//! use groundwork::strategy::Strategy;
//!
//! // Resolve the strategy for a detected platform
//! let strategy = Strategy::select(PlatformProfile::DebianLinux, &|_| true).unwrap();
//! assert!(strategy.install_command("git").contains("git"));
//! ```

pub mod cli;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod platform;
pub mod python;
pub mod shell;
pub mod strategy;
pub mod ui;

pub use error::{GroundworkError, Result};
