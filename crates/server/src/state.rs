//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::AuthService;
use common::SessionCookieConfig;
use product_service_lib::ProductService;

use crate::config::ServerConfig;
use crate::infra::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub product_service: Arc<dyn ProductService>,
    pub db: Database,
    pub session_cookie: SessionCookieConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
        db: Database,
        session_cookie: SessionCookieConfig,
    ) -> Self {
        Self {
            auth_service,
            product_service,
            db,
            session_cookie,
        }
    }

    /// Wire the concrete services against `db`.
    pub fn from_config(db: Database, config: &ServerConfig) -> Self {
        let auth_service = auth_service_lib::build(db.get_connection(), &config.auth);
        let product_service = product_service_lib::build(db.get_connection());

        Self::new(
            Arc::new(auth_service),
            Arc::new(product_service),
            db,
            config.session_cookie.clone(),
        )
    }
}
