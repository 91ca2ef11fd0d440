pub mod repository;
pub mod seed;
pub mod sqlite;

pub use repository::{InMemoryRepository, SnapshotRepository, Storage, StorageError};
pub use seed::{SeedOutcome, seed_demo_snapshot};
