//! Homebrew self-bootstrap.
//!
//! macOS is the one platform whose package manager does not ship with the
//! OS. When `brew` is absent, the official installer script is fetched over
//! HTTPS and run non-interactively before package installation proceeds.

use crate::error::{GroundworkError, Result};
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;

/// The official Homebrew installer script.
pub const INSTALLER_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Fetch the Homebrew installer script body from a URL.
pub fn fetch_installer(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent("groundwork")
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| GroundworkError::BootstrapToolMissing {
            tool: "homebrew".to_string(),
            message: format!("failed to build HTTP client: {}", e),
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| GroundworkError::BootstrapToolMissing {
            tool: "homebrew".to_string(),
            message: format!("failed to fetch installer: {}", e),
        })?;

    if !response.status().is_success() {
        return Err(GroundworkError::BootstrapToolMissing {
            tool: "homebrew".to_string(),
            message: format!("HTTP {} fetching {}", response.status(), url),
        });
    }

    response
        .text()
        .map_err(|e| GroundworkError::BootstrapToolMissing {
            tool: "homebrew".to_string(),
            message: format!("failed to read installer body: {}", e),
        })
}

/// Write the installer script to a temp file and return the command that runs it.
///
/// `NONINTERACTIVE=1` is the installer's own switch for unattended runs.
pub fn stage_installer(script: &str) -> Result<(PathBuf, String)> {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static STAGE_COUNTER: AtomicUsize = AtomicUsize::new(0);

    let path = std::env::temp_dir().join(format!(
        "groundwork-homebrew-install-{}-{}.sh",
        std::process::id(),
        STAGE_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::write(&path, script)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    }
    let command = format!("NONINTERACTIVE=1 /bin/bash \"{}\"", path.display());
    Ok((path, command))
}

/// Ensure `brew` is available, running the official installer if not.
///
/// `lookup` answers executable presence; `runner` executes a shell command
/// and reports success. Both are injected so the bootstrap is testable.
/// Failure yields [`GroundworkError::BootstrapToolMissing`]; the caller
/// decides whether that aborts the whole run.
pub fn ensure_installed(
    lookup: &dyn Fn(&str) -> bool,
    runner: &dyn Fn(&str) -> bool,
) -> Result<()> {
    ensure_installed_from(INSTALLER_URL, lookup, runner)
}

/// [`ensure_installed`] with an explicit installer URL (tests use a mock server).
pub fn ensure_installed_from(
    url: &str,
    lookup: &dyn Fn(&str) -> bool,
    runner: &dyn Fn(&str) -> bool,
) -> Result<()> {
    if lookup("brew") {
        return Ok(());
    }

    tracing::info!("brew not found, running the Homebrew installer");
    let script = fetch_installer(url)?;
    let (path, command) = stage_installer(&script)?;
    let ok = runner(&command);
    let _ = std::fs::remove_file(&path);

    if !ok {
        return Err(GroundworkError::BootstrapToolMissing {
            tool: "homebrew".to_string(),
            message: "installer exited with a failure status".to_string(),
        });
    }

    if lookup("brew") {
        Ok(())
    } else {
        Err(GroundworkError::BootstrapToolMissing {
            tool: "homebrew".to_string(),
            message: "installer succeeded but brew is still not on PATH".to_string(),
        })
    }
}
