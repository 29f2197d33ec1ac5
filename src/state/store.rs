//! Persistent history storage.
//!
//! Records live in `.pymend/history.json` under the project directory,
//! most recent first, capped at [`HistoryStore::MAX_RECORDS`]. A missing or
//! corrupt file starts the store fresh rather than failing the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::state::RunRecord;

/// Store for a project's run history.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<RunRecord>,
}

impl HistoryStore {
    /// Number of records to keep.
    pub const MAX_RECORDS: usize = 50;

    /// File path of the history store for a project.
    pub fn history_path(project_root: &Path) -> PathBuf {
        project_root.join(".pymend").join("history.json")
    }

    /// Load the history for a project.
    ///
    /// A missing file yields an empty store; a corrupt one is logged and
    /// discarded.
    pub fn load(project_root: &Path) -> Self {
        let path = Self::history_path(project_root);

        let records = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Discarding corrupt history at {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self { path, records }
    }

    /// Records, most recent first.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Prepend a record, dropping the oldest past the cap.
    pub fn append(&mut self, record: RunRecord) {
        self.records.insert(0, record);
        self.records.truncate(Self::MAX_RECORDS);
    }

    /// Write the store back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| anyhow::anyhow!("failed to serialize history: {}", e))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn record(script: &str) -> RunRecord {
        RunRecord {
            started_at: Utc::now(),
            script: script.to_string(),
            iterations: 1,
            installed: Vec::new(),
            exit_code: Some(0),
            duration_ms: 10,
        }
    }

    #[test]
    fn load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::load(temp.path());
        assert!(store.records().is_empty());
    }

    #[test]
    fn append_save_load_round_trip() {
        let temp = TempDir::new().unwrap();

        let mut store = HistoryStore::load(temp.path());
        store.append(record("app.py"));
        store.save().unwrap();

        let reloaded = HistoryStore::load(temp.path());
        assert_eq!(reloaded.records().len(), 1);
        assert_eq!(reloaded.records()[0].script, "app.py");
    }

    #[test]
    fn most_recent_record_is_first() {
        let temp = TempDir::new().unwrap();

        let mut store = HistoryStore::load(temp.path());
        store.append(record("old.py"));
        store.append(record("new.py"));

        assert_eq!(store.records()[0].script, "new.py");
        assert_eq!(store.records()[1].script, "old.py");
    }

    #[test]
    fn records_are_capped() {
        let temp = TempDir::new().unwrap();

        let mut store = HistoryStore::load(temp.path());
        for i in 0..(HistoryStore::MAX_RECORDS + 10) {
            store.append(record(&format!("script{}.py", i)));
        }

        assert_eq!(store.records().len(), HistoryStore::MAX_RECORDS);
        // The newest record survives the cap
        let newest = format!("script{}.py", HistoryStore::MAX_RECORDS + 9);
        assert_eq!(store.records()[0].script, newest);
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let temp = TempDir::new().unwrap();
        let path = HistoryStore::history_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let store = HistoryStore::load(temp.path());
        assert!(store.records().is_empty());
    }
}
