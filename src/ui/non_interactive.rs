//! UI for CI and headless environments.
//!
//! No prompts, no animated spinners. Confirmations resolve to their
//! defaults and are noted in the output so unattended runs stay auditable.

use crate::error::Result;

use super::output::{Output, OutputMode};
use super::theme::GroundworkTheme;
use super::{SpinnerHandle, UserInterface};

/// UI that never prompts or animates.
pub struct NonInteractiveUI {
    theme: GroundworkTheme,
    output: Output,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            theme: GroundworkTheme::plain(),
            output: Output::new(mode),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.output.mode()
    }

    fn message(&mut self, msg: &str) {
        self.output.println(msg);
    }

    fn success(&mut self, msg: &str) {
        self.output.println(&self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.output.println(&self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, _key: &str, question: &str, default: bool) -> Result<bool> {
        self.output.println(&format!(
            "{} (assuming {})",
            question,
            if default { "yes" } else { "no" }
        ));
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.output.println(message);
        Box::new(StaticSpinner::default())
    }

    fn show_header(&mut self, title: &str) {
        self.output.println(title);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner substitute that just prints the final status line.
#[derive(Default)]
struct StaticSpinner;

impl SpinnerHandle for StaticSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", GroundworkTheme::plain().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        println!("{}", GroundworkTheme::plain().format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("{}", GroundworkTheme::plain().format_skipped(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        assert!(ui.confirm("install", "Install packages?", true).unwrap());
        assert!(!ui.confirm("install", "Install packages?", false).unwrap());
    }

    #[test]
    fn is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn spinner_finish_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("working");
        spinner.set_message("still working");
        spinner.finish_success("done");
    }
}
