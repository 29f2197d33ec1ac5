//! Non-interactive UI for CI and headless environments.

use crate::error::{PymendError, Result};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation that never prompts and never animates.
///
/// Used when stdout is not a terminal or `--non-interactive` is passed.
/// Asking for input here is an error: script selection needs either a
/// terminal or an explicit script argument.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt_line(&mut self, _question: &str) -> Result<String> {
        Err(PymendError::SelectionUnavailable)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}...", message);
        }
        Box::new(LineSpinner {
            silent: !self.mode.shows_status(),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints plain result lines.
struct LineSpinner {
    silent: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if !self.silent {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if !self.silent {
            println!("✗ {}", msg);
        }
    }
}
