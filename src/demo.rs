//! Create, update, and delete walk-through for stored check results.

use crate::store::{CheckRecord, ResultStore};
use crate::{EmailCheckService, Result};
use tracing::info;

/// Status written by the update step of [`crud_demonstration`].
pub const UPDATED_STATUS: &str = "verified";

/// What each step of [`crud_demonstration`] observed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Record read back right after the check was stored.
    pub created: Option<CheckRecord>,
    /// Record read back after the status was overwritten.
    pub updated: Option<CheckRecord>,
    /// Read after the delete; `None` when the record is gone.
    pub deleted: Option<CheckRecord>,
}

/// Check `email`, then update and delete the stored result.
///
/// Steps run in order and stop at the first error. Nothing is rolled back, so
/// a failed update leaves the created record in place.
pub async fn crud_demonstration<S: ResultStore>(
    service: &EmailCheckService<S>,
    email: &str,
) -> Result<DemoReport> {
    let record = service.email_check_service(email).await?;
    info!("Created check result {} with status {}", record.id, record.status);
    let created = service.read_result(&record.id).await?;

    service.update_result(&record.id, UPDATED_STATUS).await?;
    info!("Updated check result {} to {}", record.id, UPDATED_STATUS);
    let updated = service.read_result(&record.id).await?;

    service.delete_result(&record.id).await?;
    info!("Deleted check result {}", record.id);
    let deleted = service.read_result(&record.id).await?;

    Ok(DemoReport {
        created,
        updated,
        deleted,
    })
}
