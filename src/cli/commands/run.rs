//! Run command implementation.
//!
//! `pymend run` is the resolver loop: pick a script, run it, install
//! whatever module its stderr says is missing, and repeat until the
//! missing-module signature no longer appears.
//!
//! There is no retry cap. A module that can never be installed (no network,
//! bad package name) makes the loop run forever; interrupt it with Ctrl-C.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::cli::args::RunArgs;
use crate::discovery::{find_scripts, script_name};
use crate::error::{PymendError, Result};
use crate::runner::{python_executable, resolve, PythonRunner};
use crate::state::{HistoryStore, RunRecord};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Resolve a script named on the command line.
    fn resolve_explicit(&self, script: &Path) -> Result<PathBuf> {
        let path = if script.is_absolute() {
            script.to_path_buf()
        } else {
            self.project_root.join(script)
        };

        if path.is_file() {
            Ok(path)
        } else {
            Err(PymendError::ScriptNotFound { path })
        }
    }

    /// Show the numbered candidate list and read the user's selection.
    ///
    /// Anything that is not a number in `[1, N]` aborts the run; there is no
    /// re-prompt.
    fn select_script(&self, scripts: &[PathBuf], ui: &mut dyn UserInterface) -> Result<PathBuf> {
        ui.message("Python scripts available:");
        for (i, script) in scripts.iter().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, script_name(script)));
        }

        let line = ui.prompt_line("Enter the number of the script to run")?;
        let input = line.trim().to_string();

        let choice: usize = input.parse().map_err(|_| PymendError::InvalidSelection {
            input: input.clone(),
            max: scripts.len(),
        })?;

        if choice < 1 || choice > scripts.len() {
            return Err(PymendError::InvalidSelection {
                input,
                max: scripts.len(),
            });
        }

        Ok(scripts[choice - 1].clone())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let script = match &self.args.script {
            Some(path) => self.resolve_explicit(path)?,
            None => {
                let scripts = find_scripts(&self.project_root)?;
                if scripts.is_empty() {
                    ui.message("No Python scripts found in the current directory.");
                    tracing::warn!(
                        "No Python scripts found in {}",
                        self.project_root.display()
                    );
                    return Ok(CommandResult::success());
                }
                self.select_script(&scripts, ui)?
            }
        };

        let name = script_name(&script);
        ui.success(&format!("Selected {}", name));

        let python = self
            .args
            .python
            .clone()
            .unwrap_or_else(python_executable);
        let runner = PythonRunner::new(python);

        let started_at = Utc::now();
        let summary = resolve(&script, &runner, ui)?;

        ui.success("All required modules are installed. No more errors.");

        let mut store = HistoryStore::load(&self.project_root);
        store.append(RunRecord::from_summary(started_at, &name, &summary));
        if let Err(e) = store.save() {
            tracing::warn!("Could not save run history: {}", e);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_scripts(names: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::write(temp.path().join(name), "print('hi')\n").unwrap();
        }
        temp
    }

    #[test]
    fn empty_directory_reports_and_succeeds_without_prompting() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No Python scripts found"));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn out_of_range_selection_aborts_before_execution() {
        let temp = setup_scripts(&["a.py", "b.py"]);
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        let mut ui = MockUI::new();
        ui.queue_line("99");

        let result = cmd.execute(&mut ui);

        assert!(matches!(
            result,
            Err(PymendError::InvalidSelection { max: 2, .. })
        ));
        // Nothing ran, so nothing was recorded
        assert!(!HistoryStore::history_path(temp.path()).exists());
    }

    #[test]
    fn zero_selection_is_out_of_range() {
        let temp = setup_scripts(&["a.py"]);
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        let mut ui = MockUI::new();
        ui.queue_line("0");

        let result = cmd.execute(&mut ui);
        assert!(matches!(result, Err(PymendError::InvalidSelection { .. })));
    }

    #[test]
    fn non_numeric_selection_aborts() {
        let temp = setup_scripts(&["a.py"]);
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        let mut ui = MockUI::new();
        ui.queue_line("abc");

        let result = cmd.execute(&mut ui);
        assert!(matches!(
            result,
            Err(PymendError::InvalidSelection { ref input, .. }) if input == "abc"
        ));
    }

    #[test]
    fn select_script_returns_chosen_path() {
        let temp = setup_scripts(&["a.py", "b.py", "c.py"]);
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        let scripts = find_scripts(temp.path()).unwrap();
        let mut ui = MockUI::new();
        ui.queue_line("2");

        let chosen = cmd.select_script(&scripts, &mut ui).unwrap();

        assert_eq!(script_name(&chosen), "b.py");
        assert!(ui.has_message("1. a.py"));
        assert!(ui.has_message("3. c.py"));
    }

    #[test]
    fn selection_input_is_trimmed() {
        let temp = setup_scripts(&["a.py"]);
        let cmd = RunCommand::new(temp.path(), RunArgs::default());
        let scripts = find_scripts(temp.path()).unwrap();
        let mut ui = MockUI::new();
        ui.queue_line("  1  ");

        let chosen = cmd.select_script(&scripts, &mut ui).unwrap();
        assert_eq!(script_name(&chosen), "a.py");
    }

    #[test]
    fn explicit_missing_script_is_not_found() {
        let temp = TempDir::new().unwrap();
        let args = RunArgs {
            script: Some(PathBuf::from("ghost.py")),
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);
        assert!(matches!(result, Err(PymendError::ScriptNotFound { .. })));
    }

    #[test]
    fn explicit_script_skips_selection_and_records_history() {
        if std::process::Command::new(python_executable())
            .arg("--version")
            .output()
            .is_err()
        {
            return;
        }

        let temp = setup_scripts(&["ok.py"]);
        let args = RunArgs {
            script: Some(PathBuf::from("ok.py")),
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_success("No more errors"));

        let store = HistoryStore::load(temp.path());
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].script, "ok.py");
        assert_eq!(store.records()[0].iterations, 1);
    }
}
