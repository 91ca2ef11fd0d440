use std::sync::Arc;

use lms_core::catalog::Catalog;
use lms_core::fixtures;
use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::lesson_service::LessonService;
use crate::store_service::StoreService;
use crate::Clock;

/// Assembles app-facing services around one store.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<StoreService>,
    catalog: Arc<CatalogService>,
    lessons: Arc<LessonService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or rehydration fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock).await
    }

    /// Build services over throwaway in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if rehydration fails.
    pub async fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), clock).await
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the stored record cannot be read.
    pub async fn from_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(fixtures::catalog());
        let store = Arc::new(
            StoreService::open(clock, Arc::clone(&catalog), Arc::clone(&storage.snapshots))
                .await?,
        );
        Ok(Self::assemble(store, catalog))
    }

    fn assemble(store: Arc<StoreService>, catalog: Arc<Catalog>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            lessons: Arc::new(LessonService::new(Arc::clone(&store))),
            dashboard: Arc::new(DashboardService::new(Arc::clone(&store))),
            store,
        }
    }

    #[must_use]
    pub fn store(&self) -> Arc<StoreService> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
