//! Python environment provisioning.
//!
//! The bootstrap finishes by creating a virtual environment and installing
//! the declared Python requirements into it with the environment's own pip,
//! so tool dependencies never leak into the system interpreter.

use crate::error::{GroundworkError, Result};
use std::path::{Path, PathBuf};

/// Default virtual environment directory.
pub const DEFAULT_VENV_DIR: &str = ".groundwork-venv";

/// Default requirements file consumed by the bootstrap.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Pick the interpreter used to create the environment.
///
/// Prefers `python3`; falls back to `python` (Termux and Windows ship it
/// under that name).
pub fn interpreter(lookup: &dyn Fn(&str) -> bool) -> Option<&'static str> {
    if lookup("python3") {
        Some("python3")
    } else if lookup("python") {
        Some("python")
    } else {
        None
    }
}

/// The command creating a virtual environment at `dir`.
pub fn venv_command(interpreter: &str, dir: &Path) -> String {
    format!("{} -m venv \"{}\"", interpreter, dir.display())
}

/// Path of the pip executable inside a virtual environment.
pub fn venv_pip(dir: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        dir.join("Scripts").join("pip.exe")
    } else {
        dir.join("bin").join("pip")
    }
}

/// The command installing a requirements file into the environment.
pub fn pip_install_command(venv_dir: &Path, requirements: &Path) -> String {
    format!(
        "\"{}\" install -r \"{}\"",
        venv_pip(venv_dir).display(),
        requirements.display()
    )
}

/// Create the virtual environment, skipping if it already exists.
///
/// Failure is fatal for the bootstrap
/// ([`GroundworkError::EnvironmentCreationFailed`]).
pub fn create_venv(
    dir: &Path,
    lookup: &dyn Fn(&str) -> bool,
    runner: &dyn Fn(&str) -> bool,
) -> Result<()> {
    if venv_pip(dir).exists() {
        tracing::debug!(dir = %dir.display(), "virtual environment already exists");
        return Ok(());
    }

    let Some(python) = interpreter(lookup) else {
        return Err(GroundworkError::EnvironmentCreationFailed {
            path: dir.display().to_string(),
            message: "no python3 or python interpreter on PATH".to_string(),
        });
    };

    let command = venv_command(python, dir);
    tracing::info!(command = %command, "creating virtual environment");
    if runner(&command) {
        Ok(())
    } else {
        Err(GroundworkError::EnvironmentCreationFailed {
            path: dir.display().to_string(),
            message: format!("'{}' exited with a failure status", command),
        })
    }
}

/// Install the requirements file into the environment.
///
/// A missing file is an informational skip (`Ok(false)`); a pip failure is
/// fatal per the bootstrap exit-code contract.
pub fn install_requirements(
    venv_dir: &Path,
    requirements: &Path,
    runner: &dyn Fn(&str) -> bool,
) -> Result<bool> {
    if !requirements.exists() {
        tracing::info!(file = %requirements.display(), "no requirements file, skipping");
        return Ok(false);
    }

    let command = pip_install_command(venv_dir, requirements);
    tracing::info!(command = %command, "installing python requirements");
    if runner(&command) {
        Ok(true)
    } else {
        Err(GroundworkError::PackageInstallFailed {
            package: format!("python requirements ({})", requirements.display()),
            reason: "pip exited with a failure status".to_string(),
        })
    }
}
