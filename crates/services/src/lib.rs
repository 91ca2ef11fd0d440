#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod dashboard_service;
pub mod error;
pub mod lesson_service;
pub mod store_service;

pub use lms_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogSearch, CatalogService, HomeSections};
pub use dashboard_service::{
    Dashboard, DashboardCourse, DashboardService, DashboardSummary, NoteListing, build_dashboard,
};
pub use error::{AppServicesError, StoreServiceError};
pub use lesson_service::{LessonContext, LessonPage, LessonService, resolve_lesson};
pub use store_service::StoreService;
