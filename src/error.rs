//! Error types for pymend operations.
//!
//! This module defines [`PymendError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PymendError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PymendError::Other`) for unexpected errors
//! - A failed `pip install` is *not* fatal: the resolve loop logs
//!   [`PymendError::InstallFailed`] and keeps going

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pymend operations.
#[derive(Debug, Error)]
pub enum PymendError {
    /// The user's script selection was not a number in `[1, N]`.
    #[error("Invalid selection '{input}': expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    /// A script named on the command line does not exist.
    #[error("Script not found: {path}")]
    ScriptNotFound { path: PathBuf },

    /// Interactive selection was requested without a terminal.
    #[error("Script selection requires a terminal; pass a script name instead")]
    SelectionUnavailable,

    /// pip exited non-zero while installing a package.
    #[error("Failed to install '{package}' (exit code {code:?})")]
    InstallFailed { package: String, code: Option<i32> },

    /// A child process could not be launched at all.
    #[error("Failed to launch command: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pymend operations.
pub type Result<T> = std::result::Result<T, PymendError>;
