//! Sequential package installer loop.
//!
//! Each [`PackageRequest`] is resolved independently against the selected
//! [`Strategy`]: presence check first, then the install command per
//! candidate name, advancing through fallbacks on failure. The loop is
//! strictly sequential: package managers hold a global lock and are not
//! safe to invoke concurrently from one host.

pub mod outcome;
pub mod request;

pub use outcome::{InstallOutcome, InstallReport};
pub use request::PackageRequest;

use crate::error::{GroundworkError, Result};
use crate::shell;
use crate::strategy::Strategy;
use crate::ui::UserInterface;

/// Injected host interactions for the installer loop.
pub struct InstallerContext<'a> {
    /// Check whether an executable is on PATH.
    pub lookup: &'a dyn Fn(&str) -> bool,
    /// Run a shell command, returning true on success.
    pub runner: &'a dyn Fn(&str) -> bool,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        lookup: &shell::executable_on_path,
        runner: &|cmd| shell::execute_check(cmd),
    }
}

/// Resolves package requests against one strategy.
///
/// Holds the refreshed-index flag: the manager's update command runs at
/// most once per process, lazily before the first actual install, so a run
/// where everything is already present invokes the manager zero times.
pub struct Installer<'a> {
    strategy: &'a Strategy,
    ctx: &'a InstallerContext<'a>,
    index_refreshed: bool,
}

impl<'a> Installer<'a> {
    /// Create an installer for the given strategy and host context.
    pub fn new(strategy: &'a Strategy, ctx: &'a InstallerContext<'a>) -> Self {
        Self {
            strategy,
            ctx,
            index_refreshed: false,
        }
    }

    /// Resolve a single request.
    pub fn install(
        &mut self,
        request: &PackageRequest,
        ui: &mut dyn UserInterface,
    ) -> InstallOutcome {
        if (self.ctx.lookup)(request.presence_check())
            || request.candidates().any(|c| (self.ctx.lookup)(c))
        {
            tracing::debug!(package = %request.name, "already present");
            ui.success(&format!("{} is already installed", request.name));
            return InstallOutcome::AlreadyPresent;
        }

        ui.message(&format!("{} not found, installing...", request.name));

        let mut attempts = 0;
        for candidate in request.candidates() {
            attempts += 1;
            self.refresh_index_once(ui);

            let command = self.strategy.install_command(candidate);
            tracing::info!(package = candidate, command = %command, "installing");
            if (self.ctx.runner)(&command) {
                ui.success(&format!("{} installed", candidate));
                return InstallOutcome::Installed;
            }

            tracing::warn!(package = candidate, "install command failed");
            if request.candidates().count() > attempts {
                ui.warning(&format!(
                    "{} failed to install, trying next candidate",
                    candidate
                ));
            }
        }

        InstallOutcome::Failed {
            reason: format!(
                "all {} candidate{} failed",
                attempts,
                if attempts == 1 { "" } else { "s" }
            ),
        }
    }

    /// Resolve a sequence of requests in order.
    ///
    /// A failed required request aborts immediately with
    /// [`GroundworkError::PackageInstallFailed`]; failed optional requests
    /// are warned about and skipped.
    pub fn install_all(
        &mut self,
        requests: &[PackageRequest],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<InstallReport>> {
        let mut reports = Vec::with_capacity(requests.len());

        for request in requests {
            let outcome = self.install(request, ui);

            if let InstallOutcome::Failed { ref reason } = outcome {
                if request.required {
                    ui.error(&format!("required package {} failed", request.name));
                    return Err(GroundworkError::PackageInstallFailed {
                        package: request.name.clone(),
                        reason: reason.clone(),
                    });
                }
                ui.warning(&format!(
                    "optional package {} skipped ({})",
                    request.name, reason
                ));
            }

            reports.push(InstallReport {
                package: request.name.clone(),
                outcome,
            });
        }

        Ok(reports)
    }

    /// Run the manager's index update command once, before the first install.
    ///
    /// A failed update is a warning, not an error; the install itself is
    /// the authoritative check.
    fn refresh_index_once(&mut self, ui: &mut dyn UserInterface) {
        if self.index_refreshed {
            return;
        }
        self.index_refreshed = true;

        if let Some(update) = self.strategy.update_command() {
            tracing::info!(command = %update, "refreshing package index");
            if !(self.ctx.runner)(&update) {
                ui.warning("package index update failed, attempting install anyway");
            }
        }
    }
}
