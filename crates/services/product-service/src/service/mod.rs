//! Service layer - Business logic.

mod product_service;

pub use product_service::{BulkPriceUpdate, Catalog, ProductService};
