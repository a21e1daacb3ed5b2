//! Verification results persisted through a [`ResultStore`].

use crate::store::{CheckRecord, MemoryStore, ResultStore, StoreError};
use crate::{Client, Error, Result};
use tracing::debug;

/// Pairs a [`Client`] with a [`ResultStore`] so verification results can be
/// kept, revised, and discarded by id.
///
/// Records are keyed by the checked email address.
#[derive(Debug)]
pub struct EmailCheckService<S = MemoryStore> {
    client: Client,
    store: S,
}

impl EmailCheckService<MemoryStore> {
    /// Service backed by a fresh in-memory store.
    pub fn in_memory(client: Client) -> Self {
        Self::new(client, MemoryStore::new())
    }
}

impl<S: ResultStore> EmailCheckService<S> {
    pub fn new(client: Client, store: S) -> Self {
        Self { client, store }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Verify `email` and store the outcome under the address.
    ///
    /// The stored status is the API's `status` field, falling back to the
    /// legacy `result` field, and `unknown` when neither is present.
    pub async fn email_check_service(&self, email: &str) -> Result<CheckRecord> {
        let verification = self.client.verification_email(email).await?;

        let status = verification
            .status
            .or(verification.result)
            .unwrap_or_else(|| "unknown".to_string());
        let record = CheckRecord {
            id: email.to_string(),
            status,
            score: verification.score,
        };

        self.store
            .create(&record.id, record.clone())
            .await
            .map_err(|e| Error::storage("email_check_service", e))?;
        debug!("Stored check result for {}: {}", record.id, record.status);

        Ok(record)
    }

    pub async fn read_result(&self, id: &str) -> Result<Option<CheckRecord>> {
        self.store
            .read(id)
            .await
            .map_err(|e| Error::storage("read_result", e))
    }

    /// Overwrite the stored status for `id`, keeping the rest of the record.
    pub async fn update_result(&self, id: &str, status: &str) -> Result<CheckRecord> {
        let current = self.read_result(id).await?.ok_or_else(|| {
            Error::storage("update_result", StoreError::NotFound(id.to_string()))
        })?;

        let updated = CheckRecord {
            status: status.to_string(),
            ..current
        };
        self.store
            .update(id, updated.clone())
            .await
            .map_err(|e| Error::storage("update_result", e))?;

        Ok(updated)
    }

    pub async fn delete_result(&self, id: &str) -> Result<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| Error::storage("delete_result", e))
    }
}
