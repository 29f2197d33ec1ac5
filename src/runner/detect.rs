//! Missing-module detection.
//!
//! A failed import surfaces in Python's stderr as
//! `ModuleNotFoundError: No module named '<name>'`. Nothing else in the
//! error stream is recognized here; only this one signature drives the
//! resolve loop.

use regex::Regex;
use std::sync::LazyLock;

static MODULE_NOT_FOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ModuleNotFoundError: No module named ['"]([^'"]+)['"]"#).unwrap()
});

/// Extract the missing module name from captured stderr, if present.
///
/// Returns the name exactly as Python reported it, which may be a dotted
/// submodule path; see [`pip_package`] for the installable package name.
pub fn missing_module(stderr: &str) -> Option<String> {
    MODULE_NOT_FOUND
        .captures(stderr)
        .map(|caps| caps[1].to_string())
}

/// Map a reported module name to the package pip should install.
///
/// Python reports the full dotted path of the import that failed, but pip
/// distributions are addressed by their top-level package.
pub fn pip_package(module: &str) -> &str {
    module.split('.').next().unwrap_or(module)
}
