use std::sync::Arc;

use dioxus::prelude::*;
use lms_core::store::StoreState;
use services::{CatalogService, DashboardService, LessonService, StoreService};

pub trait UiApp: Send + Sync {
    fn store(&self) -> Arc<StoreService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn lessons(&self) -> Arc<LessonService>;
    fn dashboard(&self) -> Arc<DashboardService>;
}

#[derive(Clone)]
pub struct AppContext {
    store: Arc<StoreService>,
    catalog: Arc<CatalogService>,
    lessons: Arc<LessonService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            store: app.store(),
            catalog: app.catalog(),
            lessons: app.lessons(),
            dashboard: app.dashboard(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Latest store state, kept current by a subscription to the store.
pub fn use_store_state() -> Signal<Arc<StoreState>> {
    let ctx = use_context::<AppContext>();
    let store = ctx.store();
    let mut state = use_signal(|| store.snapshot());

    use_future(move || {
        let mut updates = ctx.store().subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let next = Arc::clone(&updates.borrow_and_update());
                state.set(next);
            }
        }
    });

    state
}
