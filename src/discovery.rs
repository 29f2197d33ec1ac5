//! Candidate-script discovery.
//!
//! Enumerates the `*.py` files in the project directory. The list is
//! discovered once per run, sorted by file name so the numbering shown to
//! the user is stable across invocations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Extension that marks a file as a candidate script.
const SCRIPT_EXTENSION: &str = "py";

/// Find candidate scripts in `dir`, sorted by file name.
///
/// Only regular files with the `.py` extension qualify; directories and
/// anything else are skipped.
pub fn find_scripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
        })
        .collect();

    scripts.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));

    Ok(scripts)
}

/// Display name of a script (its file name).
pub fn script_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
