//! History command implementation.
//!
//! `pymend history` shows past resolve-loop runs.

use std::path::{Path, PathBuf};

use crate::cli::args::HistoryArgs;
use crate::error::Result;
use crate::state::{HistoryStore, RunRecord};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The history command implementation.
pub struct HistoryCommand {
    project_root: PathBuf,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(project_root: &Path, args: HistoryArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Format a single run entry line.
    fn format_run_line(record: &RunRecord) -> String {
        let status = if record.clean_exit() { "[ok]" } else { "[err]" };
        let attempt_label = if record.iterations == 1 {
            "attempt"
        } else {
            "attempts"
        };
        format!(
            "{} {} - {} ({} {}, {} installed)",
            status,
            record.started_at.format("%Y-%m-%d %H:%M"),
            record.script,
            record.iterations,
            attempt_label,
            record.installed.len(),
        )
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = HistoryStore::load(&self.project_root);

        let limit = self.args.limit.unwrap_or(10);
        let records = &store.records()[..store.records().len().min(limit)];

        if records.is_empty() {
            ui.message("No run history for this project.");
            return Ok(CommandResult::success());
        }

        for record in records {
            let line = Self::format_run_line(record);
            if record.clean_exit() {
                ui.success(&line);
            } else {
                ui.warning(&line);
            }

            if self.args.detail && !record.installed.is_empty() {
                ui.message(&format!("    Installed: {}", record.installed.join(", ")));
            }
        }

        Ok(CommandResult::success())
    }
}
