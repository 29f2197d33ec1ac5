//! List command implementation.
//!
//! `pymend list` shows the candidate scripts without running anything.

use std::path::{Path, PathBuf};

use crate::discovery::{find_scripts, script_name};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scripts = find_scripts(&self.project_root)?;

        if scripts.is_empty() {
            ui.message("No Python scripts found in the current directory.");
            return Ok(CommandResult::success());
        }

        ui.message("Python scripts available:");
        for (i, script) in scripts.iter().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, script_name(script)));
        }

        Ok(CommandResult::success())
    }
}
