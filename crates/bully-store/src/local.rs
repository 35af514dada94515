use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bully_core::TransactionLog;
use tracing::debug;

use crate::{log_file_name, StoreError, TransactionSink};

pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Writes each transaction as a pretty-printed JSON file in one directory.
///
/// Two logs for the same name within the same second share a file name;
/// the later write replaces the earlier one.
pub struct LocalLogStore {
    base_dir: PathBuf,
}

impl LocalLogStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for LocalLogStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOGS_DIR)
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl TransactionSink for LocalLogStore {
    async fn record(&self, log: &TransactionLog) -> Result<PathBuf, StoreError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(io_err(&self.base_dir))?;

        let path = self
            .base_dir
            .join(log_file_name(&log.timestamp, &log.input_fields.name));
        let body = serde_json::to_vec_pretty(log)?;
        tokio::fs::write(&path, body).await.map_err(io_err(&path))?;
        debug!(path = %path.display(), "transaction log written");
        Ok(path)
    }

    async fn list(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.base_dir).await {
            Ok(e) => e,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(io_err(&self.base_dir)(e)),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(io_err(&self.base_dir))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // File names lead with the timestamp, so lexical order is chronological.
        paths.sort();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bully_core::PersonRequest;
    use chrono::{Local, TimeZone};
    use serde_json::Value;

    fn log_at(secs: u32, name: &str, feedback: &str) -> TransactionLog {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, secs).unwrap();
        let person = PersonRequest::new(name, Some("Acme"), None, "coffee").unwrap();
        TransactionLog::new(at, person, "research".into(), feedback.into())
    }

    #[tokio::test]
    async fn record_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalLogStore::new(tmp.path().join("nested/logs"));

        let path = store.record(&log_at(2, "Jane Doe", "nope")).await.unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "20240309_070502_jane_doe.json"
        );

        let json: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(json["feedback_response"], "nope");
        assert_eq!(json["search_response"], "research");
        assert_eq!(json["input_fields"]["company"], "Acme");
    }

    #[tokio::test]
    async fn same_second_same_name_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalLogStore::new(tmp.path());

        let first = store.record(&log_at(2, "Jane Doe", "first")).await.unwrap();
        let second = store.record(&log_at(2, "Jane Doe", "second")).await.unwrap();
        assert_eq!(first, second);

        let logs = store.list().await.unwrap();
        assert_eq!(logs.len(), 1);
        let json: Value = serde_json::from_slice(&std::fs::read(&logs[0]).unwrap()).unwrap();
        assert_eq!(json["feedback_response"], "second");
    }

    #[tokio::test]
    async fn list_is_chronological_and_json_only() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalLogStore::new(tmp.path());

        store.record(&log_at(9, "Zed", "z")).await.unwrap();
        store.record(&log_at(1, "Amy", "a")).await.unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "ignore me").unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["20240309_070501_amy.json", "20240309_070509_zed.json"]
        );
    }

    #[tokio::test]
    async fn list_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalLogStore::new(tmp.path().join("absent"));
        assert!(store.list().await.unwrap().is_empty());
    }
}
