//! Token codec - signs and verifies HS256 session tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppResult, JwtConfig};
use domain::User;

/// Identity claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly minted token and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// Encodes and decodes signed session tokens with a server-held secret.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("keys", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second it expires
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_bytes()),
            validation,
            ttl: Duration::hours(config.expiration_hours),
        }
    }

    /// Lifetime of every token this codec issues
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a token for `user`, valid for `ttl` from now.
    pub fn issue(&self, user: &User) -> AppResult<SessionToken> {
        self.issue_at(user, Utc::now())
    }

    /// Mint a token as if issued at `issued_at`.
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AppResult<SessionToken> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(SessionToken { value, expires_at })
    }

    /// Verify signature and expiry, returning the claims.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
