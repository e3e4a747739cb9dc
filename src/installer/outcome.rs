//! Install outcomes.

use std::fmt;

/// Result of resolving one package request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The executable was already on PATH; no install command ran.
    AlreadyPresent,
    /// One of the candidate names installed successfully.
    Installed,
    /// Every candidate failed.
    Failed { reason: String },
}

impl InstallOutcome {
    /// Whether the package is usable after this outcome.
    pub fn is_success(&self) -> bool {
        !matches!(self, InstallOutcome::Failed { .. })
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::AlreadyPresent => f.write_str("already present"),
            InstallOutcome::Installed => f.write_str("installed"),
            InstallOutcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Outcome of one request, for end-of-run reporting.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// The primary package name of the request.
    pub package: String,
    /// How the request resolved.
    pub outcome: InstallOutcome,
}
