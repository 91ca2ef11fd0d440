use chrono::{DateTime, Utc};
use lms_core::fixtures;
use lms_core::store::{STORAGE_KEY, StoreState};

use crate::repository::{SnapshotRepository, StorageError};

/// What [`seed_demo_snapshot`] did to the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No record existed; the demo record was written.
    Created,
    /// An existing record was overwritten.
    Replaced,
    /// A record existed and `reset` was off.
    Kept,
}

/// Write the demo account's store record relative to `now`.
///
/// An existing record is only overwritten when `reset` is set. A record
/// that no longer decodes counts as existing.
///
/// # Errors
///
/// Returns `StorageError` if the backend fails.
pub async fn seed_demo_snapshot(
    repo: &dyn SnapshotRepository,
    now: DateTime<Utc>,
    reset: bool,
) -> Result<SeedOutcome, StorageError> {
    let existing = match repo.load(STORAGE_KEY).await {
        Ok(record) => record.is_some(),
        Err(StorageError::Serialization(_)) => true,
        Err(err) => return Err(err),
    };
    if existing && !reset {
        return Ok(SeedOutcome::Kept);
    }

    let record = StoreState::demo(&fixtures::catalog(), now).to_persisted();
    repo.save(STORAGE_KEY, &record).await?;
    Ok(if existing {
        SeedOutcome::Replaced
    } else {
        SeedOutcome::Created
    })
}
