//! Script execution and the dependency-resolve loop.
//!
//! The [`ScriptRunner`] trait is the seam between the loop policy in
//! [`workflow`] and the actual child processes: [`PythonRunner`] shells out
//! to the Python interpreter and pip, while tests substitute canned results.

pub mod detect;
pub mod execute;
pub mod install;
pub mod workflow;

pub use detect::{missing_module, pip_package};
pub use execute::{python_executable, run_script, ExecResult};
pub use install::pip_install;
pub use workflow::{resolve, run_once, Iteration, ResolveSummary};

use std::path::Path;

use crate::error::Result;

/// Runs scripts and installs packages on behalf of the resolve loop.
pub trait ScriptRunner {
    /// Run one script to completion, capturing its output.
    fn run_script(&self, script: &Path) -> Result<ExecResult>;

    /// Install one package with the platform package manager.
    fn install(&self, package: &str) -> Result<()>;
}

/// Production runner backed by a Python interpreter.
pub struct PythonRunner {
    python: String,
}

impl PythonRunner {
    /// Create a runner using the given interpreter executable.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The interpreter this runner invokes.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl ScriptRunner for PythonRunner {
    fn run_script(&self, script: &Path) -> Result<ExecResult> {
        execute::run_script(&self.python, script)
    }

    fn install(&self, package: &str) -> Result<()> {
        install::pip_install(&self.python, package)
    }
}
