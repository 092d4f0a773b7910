//! Middleware for authentication and role enforcement.

mod auth;

pub use auth::{authenticate, require_admin, CurrentUser};
