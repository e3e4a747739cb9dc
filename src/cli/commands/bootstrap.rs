//! The `bootstrap` command: detect, select, install, provision Python.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::cli::args::BootstrapArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::{GroundworkError, Result};
use crate::installer::{InstallOutcome, Installer, InstallerContext};
use crate::manifest::{self, Manifest};
use crate::platform;
use crate::python;
use crate::shell::{self, CommandOptions, RunLog};
use crate::strategy::{homebrew, BootstrapTool, Strategy};
use crate::ui::UserInterface;

/// Full bootstrap run.
pub struct BootstrapCommand {
    args: BootstrapArgs,
    manifest: Option<PathBuf>,
    log_file: PathBuf,
}

impl BootstrapCommand {
    /// Create a bootstrap command.
    pub fn new(args: BootstrapArgs, manifest: Option<PathBuf>, log_file: PathBuf) -> Self {
        Self {
            args,
            manifest,
            log_file,
        }
    }
}

impl Command for BootstrapCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!("groundwork v{}", env!("CARGO_PKG_VERSION")));

        let log = RefCell::new(RunLog::open(&self.log_file)?);

        // Platform identity is detected once and passed explicitly from here on
        let profile = platform::detect_host();
        log.borrow_mut()
            .note(&format!("detected platform: {}", profile.as_str()))?;

        if !profile.is_supported() {
            // No package manager may be invoked on an unknown host
            return Err(GroundworkError::UnsupportedPlatform {
                detail: "no platform probe matched this host".to_string(),
            });
        }
        ui.message(&format!("Detected platform: {}", profile));

        let strategy = Strategy::select_for_host(profile)?;

        let dry_run = self.args.dry_run;
        let echo_output = ui.output_mode().shows_command_output();
        let runner = |cmd: &str| -> bool {
            if dry_run {
                println!("[dry-run] {}", cmd);
                let _ = log.borrow_mut().note(&format!("[dry-run] {}", cmd));
                return true;
            }
            let _ = log.borrow_mut().command(cmd);
            match shell::execute(cmd, &CommandOptions::default()) {
                Ok(result) => {
                    let combined = result.combined_output();
                    let _ = log.borrow_mut().output(&combined);
                    if echo_output {
                        print!("{}", combined);
                    }
                    if !result.success {
                        let _ = log
                            .borrow_mut()
                            .note(&format!("exit code {:?}", result.exit_code));
                    }
                    result.success
                }
                Err(e) => {
                    let _ = log.borrow_mut().note(&format!("spawn failed: {}", e));
                    false
                }
            }
        };

        if strategy.bootstrap_tool() == Some(BootstrapTool::Homebrew) {
            if dry_run {
                if !shell::executable_on_path("brew") {
                    ui.message("dry-run: would run the Homebrew installer");
                }
            } else {
                let mut spinner = ui.start_spinner("Checking Homebrew");
                match homebrew::ensure_installed(&shell::executable_on_path, &runner) {
                    Ok(()) => spinner.finish_success("Homebrew available"),
                    Err(e) => {
                        spinner.finish_error("Homebrew bootstrap failed");
                        // Every macOS package depends on brew, so this is fatal
                        return Err(e);
                    }
                }
            }
        }

        let mut requests = manifest::core_requests(profile);
        if let Some(path) = &self.manifest {
            let extra = Manifest::load(path)?;
            requests.extend(extra.requests());
        }

        let missing = requests
            .iter()
            .filter(|r| {
                !shell::executable_on_path(r.presence_check())
                    && !r.candidates().any(shell::executable_on_path)
            })
            .count();

        if missing > 0 && !self.args.yes && !dry_run && ui.is_interactive() {
            let question = format!("Install {} missing package(s)?", missing);
            if !ui.confirm("install_packages", &question, true)? {
                ui.warning("Bootstrap aborted");
                log.borrow_mut().note("aborted by operator")?;
                return Ok(CommandResult::failure(1));
            }
        }

        let ctx = InstallerContext {
            lookup: &shell::executable_on_path,
            runner: &runner,
        };
        let mut installer = Installer::new(&strategy, &ctx);
        let reports = installer.install_all(&requests, ui)?;
        for report in &reports {
            log.borrow_mut()
                .note(&format!("{}: {}", report.package, report.outcome))?;
        }

        if self.args.skip_python {
            ui.message("Skipping Python environment");
        } else if dry_run {
            ui.message(&format!(
                "dry-run: would create virtual environment at {}",
                self.args.venv.display()
            ));
        } else {
            python::create_venv(&self.args.venv, &shell::executable_on_path, &runner)?;
            if python::install_requirements(&self.args.venv, &self.args.requirements, &runner)? {
                ui.success("Python requirements installed");
            } else {
                ui.message(&format!(
                    "No requirements file at {}, skipping",
                    self.args.requirements.display()
                ));
            }
        }

        let installed = reports
            .iter()
            .filter(|r| r.outcome == InstallOutcome::Installed)
            .count();
        let present = reports
            .iter()
            .filter(|r| r.outcome == InstallOutcome::AlreadyPresent)
            .count();
        let skipped = reports.len() - installed - present;

        let summary = format!(
            "Bootstrap complete: {} installed, {} already present, {} skipped",
            installed, present, skipped
        );
        log.borrow_mut().note(&summary)?;
        ui.success(&summary);

        Ok(CommandResult::success())
    }
}
