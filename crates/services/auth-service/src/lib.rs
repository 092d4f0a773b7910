//! Auth Service Library
//!
//! Registration, login and session resolution for the catalog. Users live in
//! the credential store; sessions are signed tokens minted by the token codec.

pub mod config;
pub mod service;
pub mod store;
pub mod token;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AuthServiceConfig;
use crate::service::Authenticator;
use crate::store::UserStore;
use crate::token::TokenCodec;

pub use service::{AuthService, Session, SessionError};

/// Wire the authenticator against a live database connection.
pub fn build(db: DatabaseConnection, config: &AuthServiceConfig) -> Authenticator {
    Authenticator::new(
        Arc::new(UserStore::new(db)),
        TokenCodec::new(&config.jwt),
        config.allow_admin_signup,
    )
}
