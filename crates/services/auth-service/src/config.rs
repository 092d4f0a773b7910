//! Auth service configuration.

use common::{env_parse, ConfigError, JwtConfig};

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub jwt: JwtConfig,
    /// Whether `role: admin` is honoured on self-registration
    pub allow_admin_signup: bool,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            allow_admin_signup: env_parse("ALLOW_ADMIN_SIGNUP", false)?,
        })
    }
}
