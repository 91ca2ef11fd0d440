//! Shared error types for the services crate.

use thiserror::Error;

use lms_core::store::StoreError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `StoreService` mutations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreServiceError {
    /// The action was refused; nothing changed.
    #[error("action rejected: {0}")]
    Rejected(#[from] StoreError),
    /// The next state could not be persisted; nothing changed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreServiceError {
    /// The store's reason for refusing the action, if that is what happened.
    #[must_use]
    pub fn rejection(&self) -> Option<&StoreError> {
        match self {
            StoreServiceError::Rejected(reason) => Some(reason),
            StoreServiceError::Storage(_) => None,
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
