use async_trait::async_trait;
use lms_core::store::PersistedStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use lms_core::store::STORAGE_KEY;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Encode a store record as the JSON text kept under a key.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the record cannot be encoded.
pub fn encode_record(record: &PersistedStore) -> Result<String, StorageError> {
    serde_json::to_string(record).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Decode JSON text written by [`encode_record`].
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed or foreign JSON.
pub fn decode_record(raw: &str) -> Result<PersistedStore, StorageError> {
    serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Key/value persistence for the materialized store.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Fetch the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored text is not a
    /// store record, or other storage errors.
    async fn load(&self, key: &str) -> Result<Option<PersistedStore>, StorageError>;

    /// Persist or replace the record under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save(&self, key: &str, record: &PersistedStore) -> Result<(), StorageError>;

    /// Remove the record under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Records are kept as encoded JSON so both backends share one format.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under `key`, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: &str, raw: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), raw.into());
        Ok(())
    }

    /// Raw text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

#[async_trait]
impl SnapshotRepository for InMemoryRepository {
    async fn load(&self, key: &str) -> Result<Option<PersistedStore>, StorageError> {
        self.get_raw(key)?.as_deref().map(decode_record).transpose()
    }

    async fn save(&self, key: &str, record: &PersistedStore) -> Result<(), StorageError> {
        let raw = encode_record(record)?;
        self.put_raw(key, raw)
    }

    async fn clear(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub snapshots: Arc<dyn SnapshotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: impl SnapshotRepository + 'static) -> Self {
        Self {
            snapshots: Arc::new(repo),
        }
    }
}
