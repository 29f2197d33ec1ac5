//! Logging setup.
//!
//! Two tracing layers are installed at startup:
//!
//! - a console layer on stderr, filtered by `--debug` / `RUST_LOG` and
//!   otherwise quiet (warnings and errors only), so normal runs show just
//!   the UI output;
//! - an append-only file layer writing `install_log.log` in the project
//!   directory, one `<timestamp> - <LEVEL> - <message>` line per event.
//!
//! If the log file cannot be opened, the file layer is skipped and the
//! program keeps running with console logging alone.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// File name of the append-only install log, relative to the project dir.
pub const LOG_FILE: &str = "install_log.log";

/// Event format for the install log: `<timestamp> - <LEVEL> - <message>`.
struct InstallLogFormat;

impl<S, N> FormatEvent<S, N> for InstallLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Open the install log for appending.
fn open_log_file(project_root: &Path) -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(project_root.join(LOG_FILE))
        .ok()
}

/// Initialize the tracing subscriber.
///
/// Console log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so only the install log carries the full record
pub fn init(debug: bool, project_root: &Path) {
    let console_filter = if debug {
        EnvFilter::new("pymend=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pymend=warn"))
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = open_log_file(project_root).map(|file| {
        fmt::layer()
            .event_format(InstallLogFormat)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::INFO)
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_log_file_creates_in_project_dir() {
        let temp = TempDir::new().unwrap();
        let file = open_log_file(temp.path());
        assert!(file.is_some());
        assert!(temp.path().join(LOG_FILE).exists());
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let temp = TempDir::new().unwrap();
        let mut file = open_log_file(temp.path()).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(temp.path()).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let contents = std::fs::read_to_string(temp.path().join(LOG_FILE)).unwrap();
        assert!(contents.contains("first"));
        assert!(contents.contains("second"));
    }

    #[test]
    fn open_log_file_missing_dir_returns_none() {
        let file = open_log_file(Path::new("/nonexistent/dir/for/pymend"));
        assert!(file.is_none());
    }
}
