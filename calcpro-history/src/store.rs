//! File-backed history store

use std::fs;
use std::path::{Path, PathBuf};
use chrono::Utc;
use thiserror::Error;
use tracing::warn;
use calcpro_core::QuantityKind;
use crate::HistoryEntry;

/// Entries kept per kind; older entries are evicted on record
pub const MAX_ENTRIES: usize = 5;

/// Storage failures. Only `record` surfaces these; reads degrade silently.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history serialization error: {0}")]
    Serialization(String),
}

/// Per-kind calculation logs persisted as JSON files.
///
/// One file per kind, named `calculations_<kind>.json`, holding a
/// newest-first array of at most [`MAX_ENTRIES`] entries. Writers are
/// last-write-wins; there is no cross-process coordination.
pub struct HistoryStore {
    storage_dir: PathBuf,
}

impl HistoryStore {
    pub fn new(storage_dir: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        if !storage_dir.exists() {
            fs::create_dir_all(&storage_dir)?;
        }
        Ok(HistoryStore { storage_dir })
    }

    /// Default per-user location: `~/.calcpro/history`
    pub fn default_dir() -> Result<PathBuf, HistoryError> {
        let home = dirs::home_dir().ok_or_else(|| {
            HistoryError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "home directory not found",
            ))
        })?;
        Ok(home.join(".calcpro").join("history"))
    }

    /// Record a conversion: stamp it with the current time, prepend it to
    /// the kind's log, trim to [`MAX_ENTRIES`], and persist the whole log.
    pub fn record(&self, kind: QuantityKind, mut entry: HistoryEntry) -> Result<(), HistoryError> {
        entry.timestamp = Utc::now();

        let mut log = self.list(kind);
        log.truncate(MAX_ENTRIES - 1);
        log.insert(0, entry);

        let json = serde_json::to_string_pretty(&log)
            .map_err(|e| HistoryError::Serialization(e.to_string()))?;
        fs::write(self.log_path(kind), json)?;
        Ok(())
    }

    /// The kind's log, newest first. Missing or corrupt data is an empty
    /// log, never an error.
    pub fn list(&self, kind: QuantityKind) -> Vec<HistoryEntry> {
        let path = self.log_path(kind);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&json) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(kind = %kind, error = %err, "corrupt history log, treating as empty");
                Vec::new()
            }
        }
    }

    fn log_path(&self, kind: QuantityKind) -> PathBuf {
        self.storage_dir.join(format!("calculations_{}.json", kind))
    }
}
