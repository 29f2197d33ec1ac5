//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be fed queued responses for
//! `prompt_line`.
//!
//! # Example
//!
//! ```
//! use pymend::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_line("2");
//!
//! // Use ui in code under test...
//! ui.message("Starting");
//! assert_eq!(ui.prompt_line("pick").unwrap(), "2");
//! assert!(ui.has_message("Starting"));
//! ```

use std::collections::VecDeque;

use crate::error::{PymendError, Result};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and replays queued prompt responses.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    prompts_shown: Vec<String>,
    queued_lines: VecDeque<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            interactive: true,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            interactive: true,
            ..Default::default()
        }
    }

    /// Queue a response for the next `prompt_line` call.
    pub fn queue_line(&mut self, line: &str) {
        self.queued_lines.push_back(line.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt_line(&mut self, question: &str) -> Result<String> {
        self.prompts_shown.push(question.to_string());
        self.queued_lines
            .pop_front()
            .ok_or(PymendError::SelectionUnavailable)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::default())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that records nothing and displays nothing.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_by_kind() {
        let mut ui = MockUI::new();
        ui.message("info");
        ui.success("yay");
        ui.warning("careful");
        ui.error("broke");

        assert!(ui.has_message("info"));
        assert!(ui.has_success("yay"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broke"));
    }

    #[test]
    fn replays_queued_lines_in_order() {
        let mut ui = MockUI::new();
        ui.queue_line("first");
        ui.queue_line("second");

        assert_eq!(ui.prompt_line("q1").unwrap(), "first");
        assert_eq!(ui.prompt_line("q2").unwrap(), "second");
        assert_eq!(ui.prompts_shown().len(), 2);
    }

    #[test]
    fn exhausted_queue_is_an_error() {
        let mut ui = MockUI::new();
        let result = ui.prompt_line("q");
        assert!(matches!(result, Err(PymendError::SelectionUnavailable)));
    }

    #[test]
    fn records_spinner_messages() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Running app.py (attempt 1)");
        spinner.finish_success("done");

        assert_eq!(ui.spinners().len(), 1);
        assert!(ui.spinners()[0].contains("attempt 1"));
    }
}
