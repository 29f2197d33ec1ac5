//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, HistoryArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
