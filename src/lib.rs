//! Pymend - self-healing Python script runner.
//!
//! Pymend runs a Python script, watches its stderr for the
//! `ModuleNotFoundError` signature, installs the missing module with pip,
//! and retries until the script runs without that class of failure.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`discovery`] - Candidate-script enumeration
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Console and `install_log.log` tracing setup
//! - [`runner`] - Script execution, detection, install, and the resolve loop
//! - [`state`] - Run history persistence
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use pymend::runner::missing_module;
//!
//! let stderr = "Traceback (most recent call last):\n\
//!               ModuleNotFoundError: No module named 'requests'";
//! assert_eq!(missing_module(stderr).as_deref(), Some("requests"));
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod runner;
pub mod state;
pub mod ui;

pub use error::{PymendError, Result};
