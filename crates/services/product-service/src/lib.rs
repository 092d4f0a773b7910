//! Product Service Library
//!
//! Catalog browsing (paginated, searchable, newest first) and the admin
//! mutations: create, replace, delete and bulk discount.

pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::ProductStore;
use crate::service::Catalog;

pub use service::{BulkPriceUpdate, ProductService};

/// Wire the catalog service against a live database connection.
pub fn build(db: DatabaseConnection) -> Catalog {
    Catalog::new(Arc::new(ProductStore::new(db)))
}
