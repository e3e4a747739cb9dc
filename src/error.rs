//! Error types for Groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GroundworkError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GroundworkError::Other`) for unexpected errors
//! - A failure in a required bootstrap step is fatal (exit code 1); failures
//!   inside a fallback chain are recovered locally by the installer loop

use thiserror::Error;

/// Core error type for Groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// No probe matched the host platform.
    #[error("Unsupported platform: {detail}")]
    UnsupportedPlatform { detail: String },

    /// The platform's package manager is not installed.
    #[error("Package manager '{manager}' not found: {hint}")]
    PackageManagerMissing { manager: String, hint: String },

    /// A required package could not be installed after exhausting fallbacks.
    #[error("Failed to install required package '{package}': {reason}")]
    PackageInstallFailed { package: String, reason: String },

    /// A bootstrap tool (e.g., Homebrew) could not be provisioned.
    #[error("Failed to bootstrap '{tool}': {message}")]
    BootstrapToolMissing { tool: String, message: String },

    /// Virtual environment creation failed.
    #[error("Failed to create virtual environment at {path}: {message}")]
    EnvironmentCreationFailed { path: String, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
