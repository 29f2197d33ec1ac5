//! Child-process execution.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{PymendError, Result};

/// Result of executing a script.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the script succeeded (exit code 0).
    pub success: bool,
}

impl ExecResult {
    /// Create a result from captured output.
    pub fn from_output(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            success: exit_code == Some(0),
            exit_code,
            stdout,
            stderr,
            duration,
        }
    }
}

/// Default Python interpreter for the current platform.
pub fn python_executable() -> String {
    if cfg!(target_os = "windows") {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

/// Run `script` under `python`, blocking until it exits.
///
/// stdout and stderr are captured; there is no timeout. Errors only when the
/// interpreter itself cannot be launched.
pub fn run_script(python: &str, script: &Path) -> Result<ExecResult> {
    let start = Instant::now();

    let output = Command::new(python)
        .arg(script)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|_| PymendError::CommandFailed {
            command: format!("{} {}", python, script.display()),
        })?;

    let duration = start.elapsed();

    Ok(ExecResult::from_output(
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn python_available() -> bool {
        Command::new(python_executable())
            .arg("--version")
            .output()
            .is_ok()
    }

    #[test]
    fn exec_result_success_tracks_exit_code() {
        let result =
            ExecResult::from_output(Some(0), String::new(), String::new(), Duration::ZERO);
        assert!(result.success);

        let result =
            ExecResult::from_output(Some(1), String::new(), String::new(), Duration::ZERO);
        assert!(!result.success);

        let result = ExecResult::from_output(None, String::new(), String::new(), Duration::ZERO);
        assert!(!result.success);
    }

    #[test]
    fn python_executable_is_nonempty() {
        assert!(!python_executable().is_empty());
    }

    #[test]
    fn missing_interpreter_is_command_failed() {
        let result = run_script("definitely-not-a-python", Path::new("app.py"));
        assert!(matches!(result, Err(PymendError::CommandFailed { .. })));
    }

    #[test]
    fn runs_script_and_captures_output() {
        if !python_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("hello.py");
        fs::write(&script, "print('hello from test')\n").unwrap();

        let result = run_script(&python_executable(), &script).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("hello from test"));
    }

    #[test]
    fn captures_stderr_and_nonzero_exit() {
        if !python_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("boom.py");
        fs::write(&script, "import sys\nsys.stderr.write('boom')\nsys.exit(3)\n").unwrap();

        let result = run_script(&python_executable(), &script).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("boom"));
    }
}
