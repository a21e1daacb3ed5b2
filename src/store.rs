//! Storage collaborator for verification results.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// A persisted verification result, keyed by the checked address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl CheckRecord {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            score: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no record stored for {0}")]
    NotFound(String),

    #[error("{0}")]
    Backend(String),
}

/// Key-value persistence for [`CheckRecord`]s.
///
/// Implementations own their consistency guarantees; callers do no locking.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Store `record` under `id`, replacing any record already there.
    async fn create(&self, id: &str, record: CheckRecord) -> Result<(), StoreError>;

    async fn read(&self, id: &str) -> Result<Option<CheckRecord>, StoreError>;

    /// Overwrite the record under `id`. Fails with [`StoreError::NotFound`] if absent.
    async fn update(&self, id: &str, record: CheckRecord) -> Result<(), StoreError>;

    /// Remove the record under `id`. Fails with [`StoreError::NotFound`] if absent.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// In-process [`ResultStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, CheckRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn create(&self, id: &str, record: CheckRecord) -> Result<(), StoreError> {
        self.records.write().await.insert(id.to_string(), record);
        Ok(())
    }

    async fn read(&self, id: &str) -> Result<Option<CheckRecord>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, record: CheckRecord) -> Result<(), StoreError> {
        match self.records.write().await.get_mut(id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
