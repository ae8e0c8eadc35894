//! History persisted to a JSON file between runs

use async_trait::async_trait;
use sf_core::{CurrentUser, HistoryError, HistoryRecord, InMemoryRecordStore, RecordStore};
use std::fmt::Display;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

fn store_error(path: &Path, err: impl Display) -> HistoryError {
    HistoryError::Store(format!("{}: {err}", path.display()))
}

/// Record store backed by one JSON file
///
/// The whole file is loaded on open and rewritten after every change.
#[derive(Debug)]
pub struct FileRecordStore {
    path: PathBuf,
    records: InMemoryRecordStore,
    write_lock: Mutex<()>,
}

impl FileRecordStore {
    /// Load `path`; a missing file is an empty history
    ///
    /// # Errors
    /// `HistoryError::Store` if the file is unreadable or not a record list
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        let records: Vec<HistoryRecord> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| store_error(&path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(store_error(&path, e)),
        };
        tracing::debug!(path = %path.display(), records = records.len(), "history loaded");

        Ok(Self {
            path,
            records: InMemoryRecordStore::from_records(records),
            write_lock: Mutex::new(()),
        })
    }

    /// File the history lives in
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        let json = serde_json::to_vec_pretty(&self.records.snapshot())
            .map_err(|e| store_error(&self.path, e))?;
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| store_error(dir, e))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| store_error(&self.path, e))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn insert(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.records.insert(record).await?;
        self.persist().await
    }

    async fn list_for_user(
        &self,
        user: Option<&CurrentUser>,
    ) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.records.list_for_user(user).await
    }

    async fn delete_for_user(&self, user: Option<&CurrentUser>) -> Result<usize, HistoryError> {
        let removed = self.records.delete_for_user(user).await?;
        if removed > 0 {
            self.persist().await?;
        }
        Ok(removed)
    }
}
