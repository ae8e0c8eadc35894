//! Identity and submission history
//!
//! Outer boundary only: records of past submissions keyed by user id. Export
//! and delete are plain CRUD and never touch wizard or interpreter state.

use crate::error::HistoryError;
use crate::payload::SessionId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Characters of the description shown in history listings
pub const SNIPPET_CHARS: usize = 60;

/// Fallback title for records without a description
const UNTITLED: &str = "Prozess";

/// Header line of the data-subject export
pub const EXPORT_HEADER: [&str; 3] = ["id", "process_description", "created_at"];

/// Signed-in user as handed over by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Stable user id
    pub id: String,
    /// Sign-in email
    pub email: String,
}

impl CurrentUser {
    /// Create user
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// One historical submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Record id
    pub id: Uuid,
    /// Owner
    pub user_id: String,
    /// Full process description
    pub description: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Session the result can be fetched with
    pub session_id: SessionId,
}

impl HistoryRecord {
    /// Create a record stamped now
    #[must_use]
    pub fn new(user: &CurrentUser, description: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user.id.clone(),
            description: description.into(),
            created_at: Utc::now(),
            session_id,
        }
    }

    /// Override the creation time
    #[inline]
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Listing title: the first [`SNIPPET_CHARS`] characters of the description
    #[must_use]
    pub fn snippet(&self) -> String {
        if self.description.is_empty() {
            return UNTITLED.to_string();
        }
        self.description.chars().take(SNIPPET_CHARS).collect()
    }
}

/// Row of a data-subject export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Record id
    pub id: Uuid,
    /// Full description
    pub process_description: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<&HistoryRecord> for ExportRow {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            id: record.id,
            process_description: record.description.clone(),
            created_at: record.created_at,
        }
    }
}

fn signed_in(user: Option<&CurrentUser>) -> Result<&CurrentUser, HistoryError> {
    user.ok_or(HistoryError::NotSignedIn)
}

/// Record store keyed by user identity
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a record under its owner
    async fn insert(&self, record: HistoryRecord) -> Result<(), HistoryError>;

    /// All records of the user, newest first
    async fn list_for_user(
        &self,
        user: Option<&CurrentUser>,
    ) -> Result<Vec<HistoryRecord>, HistoryError>;

    /// Remove every record of the user, returning how many were removed
    async fn delete_for_user(&self, user: Option<&CurrentUser>) -> Result<usize, HistoryError>;

    /// CSV export of the user's records, header first
    async fn export_for_user(&self, user: Option<&CurrentUser>) -> Result<String, HistoryError> {
        let records = self.list_for_user(user).await?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(EXPORT_HEADER)?;
        for record in &records {
            writer.serialize(ExportRow::from(record))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| HistoryError::Export(e.into_error().into()))?;
        String::from_utf8(bytes).map_err(|e| HistoryError::Store(e.to_string()))
    }
}

/// Process-local record store
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: DashMap<String, Vec<HistoryRecord>>,
}

impl InMemoryRecordStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with `records`
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = HistoryRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store
                .records
                .entry(record.user_id.clone())
                .or_default()
                .push(record);
        }
        store
    }

    /// Every record of every user, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        let mut all: Vec<HistoryRecord> = self
            .records
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        all
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        tracing::debug!(user = %record.user_id, session = %record.session_id, "storing history record");
        self.records
            .entry(record.user_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn list_for_user(
        &self,
        user: Option<&CurrentUser>,
    ) -> Result<Vec<HistoryRecord>, HistoryError> {
        let user = signed_in(user)?;
        let mut records = self
            .records
            .get(&user.id)
            .map(|r| r.value().clone())
            .unwrap_or_default();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete_for_user(&self, user: Option<&CurrentUser>) -> Result<usize, HistoryError> {
        let user = signed_in(user)?;
        let removed = self
            .records
            .remove(&user.id)
            .map_or(0, |(_, records)| records.len());
        tracing::info!(user = %user.id, removed, "deleted history records");
        Ok(removed)
    }
}
