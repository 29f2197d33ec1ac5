//! The dependency-resolve loop.
//!
//! One iteration is execute → detect → (install). [`run_once`] performs the
//! execute/detect half so the policy is testable in isolation; [`resolve`]
//! drives iterations until the script runs without the missing-module
//! signature.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::discovery::script_name;
use crate::error::Result;
use crate::runner::{missing_module, pip_package, ExecResult, ScriptRunner};
use crate::ui::UserInterface;

/// Outcome of one execute→detect iteration.
#[derive(Debug)]
pub enum Iteration {
    /// The script ran without a missing-module signature. Its exit status
    /// may still be non-zero for unrelated reasons.
    Complete(ExecResult),

    /// A missing module was detected in stderr.
    MissingModule { module: String },
}

/// What a completed resolve loop did.
#[derive(Debug, Clone)]
pub struct ResolveSummary {
    /// Number of times the script was executed.
    pub iterations: usize,

    /// Packages installed along the way, in order.
    pub installed: Vec<String>,

    /// Exit code of the final execution.
    pub exit_code: Option<i32>,

    /// Total wall-clock time of the loop.
    pub duration: Duration,
}

/// Run the script once and look for the missing-module signature.
pub fn run_once(script: &Path, runner: &dyn ScriptRunner) -> Result<Iteration> {
    let result = runner.run_script(script)?;

    if !result.stdout.trim().is_empty() {
        tracing::info!("Script output:\n{}", result.stdout.trim());
    }
    if !result.stderr.trim().is_empty() {
        tracing::error!("Script error:\n{}", result.stderr.trim());
    }

    match missing_module(&result.stderr) {
        Some(module) => Ok(Iteration::MissingModule { module }),
        None => Ok(Iteration::Complete(result)),
    }
}

/// Repeat execute → detect → install until the missing-module signature no
/// longer appears.
///
/// A failed install is logged and the loop continues; the next execution
/// simply fails the same way. There is no iteration cap, so a module that can
/// never be installed (no network, nonexistent package name) retries forever.
pub fn resolve(
    script: &Path,
    runner: &dyn ScriptRunner,
    ui: &mut dyn UserInterface,
) -> Result<ResolveSummary> {
    let name = script_name(script);
    let started = Instant::now();
    let mut installed = Vec::new();
    let mut iterations = 0;

    loop {
        iterations += 1;
        let mut spinner = ui.start_spinner(&format!("Running {} (attempt {})", name, iterations));

        match run_once(script, runner)? {
            Iteration::Complete(result) => {
                spinner.finish_success(&format!("{} ran without missing modules", name));

                if ui.output_mode().shows_command_output() {
                    if !result.stdout.is_empty() {
                        ui.message(result.stdout.trim_end());
                    }
                    if !result.stderr.is_empty() {
                        ui.message(result.stderr.trim_end());
                    }
                }

                tracing::info!("All required modules are installed. No more errors.");
                return Ok(ResolveSummary {
                    iterations,
                    installed,
                    exit_code: result.exit_code,
                    duration: started.elapsed(),
                });
            }
            Iteration::MissingModule { module } => {
                spinner.finish_error(&format!("Missing module '{}'", module));

                let package = pip_package(&module).to_string();
                let mut install_spinner =
                    ui.start_spinner(&format!("Installing {} via pip", package));
                match runner.install(&package) {
                    Ok(()) => {
                        install_spinner.finish_success(&format!("Installed {}", package));
                        installed.push(package);
                    }
                    Err(e) => {
                        install_spinner.finish_error(&format!("Could not install {}", package));
                        tracing::error!("Failed to install module: {}. Error: {}", package, e);
                        ui.warning(&format!("{}; retrying anyway", e));
                    }
                }
            }
        }
    }
}
