#![forbid(unsafe_code)]

pub mod catalog;
pub mod fixtures;
pub mod media;
pub mod model;
pub mod navigation;
pub mod store;
pub mod time;

pub use catalog::{Catalog, CatalogFilter};
pub use store::{Action, StoreError, StoreState};
pub use time::Clock;
