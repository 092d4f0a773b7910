//! Server configuration.

use auth_service_lib::config::AuthServiceConfig;
use common::{env_opt, env_or, env_parse, ConfigError, DatabaseConfig, SessionCookieConfig};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Origin of the browser client allowed by CORS
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Admin account bootstrapped by `catalog seed`.
#[derive(Clone)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthServiceConfig,
    pub session_cookie: SessionCookieConfig,
    pub cors_origin: String,
    pub admin: Option<AdminAccount>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_parse("SERVER_PORT", DEFAULT_PORT)?,
            database: DatabaseConfig::from_env()?,
            auth: AuthServiceConfig::from_env()?,
            session_cookie: SessionCookieConfig::from_env(),
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            admin: admin_from_env(),
        })
    }
}

/// An admin account is configured only when both email and password are set.
fn admin_from_env() -> Option<AdminAccount> {
    let email = env_opt("ADMIN_EMAIL")?;
    let password = env_opt("ADMIN_PASSWORD")?;
    Some(AdminAccount {
        email,
        password,
        name: env_or("ADMIN_NAME", "Administrator"),
    })
}
