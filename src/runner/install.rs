//! Package installation via pip.

use std::process::{Command, Stdio};

use crate::error::{PymendError, Result};

/// Install `package` with `<python> -m pip install <package>`.
///
/// Output is captured and written to the install log. Returns
/// [`PymendError::InstallFailed`] when pip exits non-zero; the resolve loop
/// logs that and carries on, so the caller decides whether it is fatal.
pub fn pip_install(python: &str, package: &str) -> Result<()> {
    tracing::info!("Attempting to install missing module: {}", package);

    let output = Command::new(python)
        .args(["-m", "pip", "install", package])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|_| PymendError::CommandFailed {
            command: format!("{} -m pip install {}", python, package),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        tracing::info!("pip output:\n{}", stdout.trim());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        tracing::warn!("pip stderr:\n{}", stderr.trim());
    }

    if output.status.success() {
        tracing::info!("Successfully installed module: {}", package);
        Ok(())
    } else {
        Err(PymendError::InstallFailed {
            package: package.to_string(),
            code: output.status.code(),
        })
    }
}
