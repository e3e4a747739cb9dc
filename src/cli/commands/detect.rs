//! The `detect` command: report platform identity and strategy.

use crate::cli::args::DetectArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::platform;
use crate::strategy::Strategy;
use crate::ui::UserInterface;

/// Report the detected platform and resolved package-manager strategy.
pub struct DetectCommand {
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a detect command.
    pub fn new(args: DetectArgs) -> Self {
        Self { args }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let profile = platform::detect_host();
        let strategy = Strategy::select_for_host(profile);
        let manager = strategy.as_ref().ok().map(|s| s.manager().binary());

        if self.args.json {
            let payload = serde_json::json!({
                "profile": profile.as_str(),
                "name": profile.display_name(),
                "supported": profile.is_supported(),
                "manager": manager,
            });
            // Machine-readable output bypasses the UI's mode filtering
            println!("{}", payload);
        } else {
            ui.message(&format!("Platform: {}", profile));
            match &strategy {
                Ok(s) => {
                    ui.message(&format!("Package manager: {}", s.manager().binary()));
                    ui.message(&format!(
                        "Install command: {}",
                        s.install_command("<package>")
                    ));
                }
                Err(e) => ui.warning(&format!("No package-manager strategy: {}", e)),
            }
        }

        if profile.is_supported() {
            Ok(CommandResult::success())
        } else {
            ui.error("Unsupported platform");
            Ok(CommandResult::failure(1))
        }
    }
}
