//! Interactive terminal UI.

use console::Term;
use dialoguer::Confirm;

use crate::error::{GroundworkError, Result};

use super::non_interactive::NonInteractiveUI;
use super::output::{Output, OutputMode};
use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, GroundworkTheme};
use super::{SpinnerHandle, UserInterface};

/// UI for interactive terminal sessions.
pub struct TerminalUI {
    theme: GroundworkTheme,
    output: Output,
    term: Term,
}

impl TerminalUI {
    /// Create a terminal UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GroundworkTheme::new()
        } else {
            GroundworkTheme::plain()
        };
        Self {
            theme,
            output: Output::new(mode),
            term: Term::stdout(),
        }
    }
}

impl UserInterface for TerminalUI {
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
        // Errors go to stderr regardless of output mode
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, _key: &str, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(|e| GroundworkError::Io(e.into()))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.output.mode().shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        self.output.println(&self.theme.format_header(title));
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_interactive() {
        let ui = create_ui(true, OutputMode::Normal);
        assert!(ui.is_interactive());
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_silent_spinner_is_hidden() {
        let mut ui = TerminalUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("working");
        spinner.finish_success("done");
    }
}
