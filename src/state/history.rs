//! Run history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::runner::ResolveSummary;

/// A record of one completed resolve loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// File name of the script that was run.
    pub script: String,

    /// Number of times the script was executed.
    pub iterations: usize,

    /// Packages installed along the way, in order.
    pub installed: Vec<String>,

    /// Exit code of the final execution.
    pub exit_code: Option<i32>,

    /// Total loop duration in milliseconds.
    pub duration_ms: u64,
}

impl RunRecord {
    /// Build a record from a finished resolve loop.
    pub fn from_summary(started_at: DateTime<Utc>, script: &str, summary: &ResolveSummary) -> Self {
        Self {
            started_at,
            script: script.to_string(),
            iterations: summary.iterations,
            installed: summary.installed.clone(),
            exit_code: summary.exit_code,
            duration_ms: summary.duration.as_millis() as u64,
        }
    }

    /// Whether the final execution exited cleanly.
    pub fn clean_exit(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn summary() -> ResolveSummary {
        ResolveSummary {
            iterations: 2,
            installed: vec!["flask".to_string()],
            exit_code: Some(0),
            duration: Duration::from_millis(1500),
        }
    }

    #[test]
    fn from_summary_copies_fields() {
        let record = RunRecord::from_summary(Utc::now(), "app.py", &summary());

        assert_eq!(record.script, "app.py");
        assert_eq!(record.iterations, 2);
        assert_eq!(record.installed, vec!["flask"]);
        assert_eq!(record.duration_ms, 1500);
        assert!(record.clean_exit());
    }

    #[test]
    fn nonzero_exit_is_not_clean() {
        let mut s = summary();
        s.exit_code = Some(1);
        let record = RunRecord::from_summary(Utc::now(), "app.py", &s);
        assert!(!record.clean_exit());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = RunRecord::from_summary(Utc::now(), "app.py", &summary());

        let json = serde_json::to_string(&record).unwrap();
        let back: RunRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.script, "app.py");
        assert_eq!(back.installed, vec!["flask"]);
    }
}
