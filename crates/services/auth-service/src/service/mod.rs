//! Service layer - Business logic.

mod auth_service;

pub use auth_service::{AuthService, Authenticator, Session, SessionError};
