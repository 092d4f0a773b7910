//! HTTP request handlers.

pub mod auth_handler;
pub mod health_handler;
pub mod product_handler;
mod rules;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use product_handler::{admin_product_routes, product_routes};
