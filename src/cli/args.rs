//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pymend - self-healing Python script runner.
#[derive(Debug, Parser)]
#[command(name = "pymend")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project directory (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output, including the script's own stdout/stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a script, installing missing modules until it imports cleanly
    /// (default if no command specified)
    Run(RunArgs),

    /// List the candidate scripts in the project directory
    List,

    /// Show past runs
    History(HistoryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Script to run (skips the interactive selection)
    pub script: Option<PathBuf>,

    /// Python interpreter to use
    #[arg(long, env = "PYMEND_PYTHON")]
    pub python: Option<String>,

    /// Never prompt; requires a script argument
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HistoryArgs {
    /// Number of runs to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show installed packages for each run
    #[arg(long)]
    pub detail: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
