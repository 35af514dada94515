mod local;

pub use local::{LocalLogStore, DEFAULT_LOGS_DIR};

use std::path::PathBuf;

use async_trait::async_trait;
use bully_core::TransactionLog;
use chrono::{DateTime, Local};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize transaction log: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write-once sink for completed transactions.
#[async_trait]
pub trait TransactionSink: Send + Sync {
    /// Persist one transaction and return where it landed.
    async fn record(&self, log: &TransactionLog) -> Result<PathBuf, StoreError>;

    /// Every persisted log, oldest first.
    async fn list(&self) -> Result<Vec<PathBuf>, StoreError>;
}

/// Replace every non-alphanumeric character with `_` and lowercase the result.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_lowercase()
}

/// `{YYYYMMDD_HHMMSS}_{sanitized_name}.json`
pub fn log_file_name(at: &DateTime<Local>, name: &str) -> String {
    format!("{}_{}.json", at.format("%Y%m%d_%H%M%S"), sanitize_name(name))
}
