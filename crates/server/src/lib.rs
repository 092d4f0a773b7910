//! Catalog API server library.
//!
//! HTTP surface of the product catalog: session-cookie authentication,
//! role-gated product management, OpenAPI docs, plus the database
//! bootstrap used by the `catalog` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::{cors_layer, create_router};
pub use state::AppState;
