//! Authentication service - registration, login and session resolution.
//!
//! Tokens are stateless: logout is a cookie operation at the HTTP edge and
//! there is no server-side revocation list.

use async_trait::async_trait;
use chrono::Duration;
use once_cell::sync::Lazy;
use std::sync::Arc;
use thiserror::Error;

use common::{AppError, AppResult};
use domain::{normalize_email, Password, Registration, User, UserRole};

use crate::store::UserRepository;
use crate::token::{SessionToken, TokenCodec};

/// Verified against when the account does not exist, so a missing email
/// costs the same hash work as a wrong password.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("timing-equaliser-password").ok());

/// An authenticated user together with the token that proves it.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: SessionToken,
}

/// Why a presented session could not be resolved to a user.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Access denied. No token provided.")]
    MissingToken,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Invalid token. User not found.")]
    UserNotFound,

    #[error(transparent)]
    Store(AppError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Store(inner) => inner,
            other => AppError::unauthorized(other.to_string()),
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account and open a session for it
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Option<UserRole>,
    ) -> AppResult<Session>;

    /// Check credentials and open a session
    async fn login(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Resolve a presented token to the current persisted user.
    ///
    /// The user is re-read on every call so role changes apply mid-session.
    async fn resolve_session(&self, token: Option<&str>) -> Result<User, SessionError>;

    /// Lifetime of a freshly issued session
    fn session_ttl(&self) -> Duration;
}

/// Concrete implementation of AuthService backed by the credential store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    codec: TokenCodec,
    allow_admin_signup: bool,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, codec: TokenCodec, allow_admin_signup: bool) -> Self {
        Self {
            users,
            codec,
            allow_admin_signup,
        }
    }

    fn open_session(&self, user: User) -> AppResult<Session> {
        let token = self.codec.issue(&user)?;
        Ok(Session { user, token })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Option<UserRole>,
    ) -> AppResult<Session> {
        let registration = Registration::new(email, password, name, role)?;

        if registration.role.is_admin() && !self.allow_admin_signup {
            tracing::warn!(email = %registration.email, "Rejected admin self-registration");
            return Err(AppError::forbidden("Admin registration is disabled"));
        }

        if self.users.find_by_email(&registration.email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let user = self.users.create(registration.into_new_user()).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        self.open_session(user)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let email = normalize_email(email)?;
        let user = self.users.find_by_email(&email).await?;

        let verified = match &user {
            Some(user) => user.password().verify(password),
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    dummy.verify(password);
                }
                false
            }
        };

        match user {
            Some(user) if verified => {
                tracing::info!(user_id = %user.id, "User logged in");
                self.open_session(user)
            }
            _ => {
                tracing::warn!(email = %email, "Failed login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn resolve_session(&self, token: Option<&str>) -> Result<User, SessionError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(SessionError::MissingToken)?;

        let claims = self.codec.decode(token).map_err(|e| {
            tracing::debug!("Rejected session token: {}", e);
            SessionError::InvalidToken
        })?;

        self.users
            .find_by_id(claims.sub)
            .await
            .map_err(SessionError::Store)?
            .ok_or(SessionError::UserNotFound)
    }

    fn session_ttl(&self) -> Duration {
        self.codec.ttl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockUserRepository;
    use chrono::Utc;
    use common::JwtConfig;
    use domain::NewUser;
    use mockall::predicate::eq;
    use uuid::Uuid;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn codec() -> TokenCodec {
        TokenCodec::new(&JwtConfig::new(SECRET, 24).unwrap())
    }

    fn stored_user(new_user: NewUser) -> User {
        User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            role: new_user.role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn user_with_password(email: &str, password: &str, role: UserRole) -> User {
        stored_user(NewUser {
            email: email.to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            name: "Jane Doe".to_string(),
            role,
        })
    }

    fn authenticator(repo: MockUserRepository, allow_admin_signup: bool) -> Authenticator {
        Authenticator::new(Arc::new(repo), codec(), allow_admin_signup)
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "jane@example.com")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u| u.email == "jane@example.com" && u.role == UserRole::Customer)
            .returning(|u| Ok(stored_user(u)));

        let service = authenticator(repo, false);
        let session = service
            .register("  Jane@Example.com ", "password123", "Jane Doe", None)
            .await
            .unwrap();

        assert_eq!(session.user.email, "jane@example.com");
        assert_ne!(session.user.password_hash, "password123");

        let claims = codec().decode(&session.token.value).unwrap();
        assert_eq!(claims.sub, session.user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|e| Ok(Some(user_with_password(e, "password123", UserRole::Customer))));
        repo.expect_create().never();

        let err = authenticator(repo, false)
            .register("jane@example.com", "password123", "Jane Doe", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(msg) if msg == "User already exists"));
    }

    #[tokio::test]
    async fn test_register_validates_before_touching_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();
        let service = authenticator(repo, false);

        let err = service
            .register("not-an-email", "password123", "Jane", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid email format"));

        let err = service
            .register("jane@example.com", "short", "Jane", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("at least 8")));

        let err = service
            .register("jane@example.com", "password123", "J", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("Name")));
    }

    #[tokio::test]
    async fn test_admin_signup_is_gated() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();

        let err = authenticator(repo, false)
            .register("boss@example.com", "password123", "Boss", Some(UserRole::Admin))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_admin_signup_when_enabled() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|u| Ok(stored_user(u)));

        let session = authenticator(repo, true)
            .register("boss@example.com", "password123", "Boss", Some(UserRole::Admin))
            .await
            .unwrap();

        assert!(session.user.is_admin());
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = user_with_password("jane@example.com", "password123", UserRole::Customer);
        let user_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "jane@example.com")
            .returning(move |_| Ok(Some(user.clone())));

        let session = authenticator(repo, false)
            .login("JANE@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(session.user.id, user_id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let user = user_with_password("jane@example.com", "password123", UserRole::Customer);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(move |email| {
            Ok((email == "jane@example.com").then(|| user.clone()))
        });
        let service = authenticator(repo, false);

        let wrong_password = service.login("jane@example.com", "wrong-password").await.unwrap_err();
        let unknown_email = service.login("ghost@example.com", "password123").await.unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.status(), unknown_email.status());
    }

    #[tokio::test]
    async fn test_resolve_session_rereads_user() {
        let user = user_with_password("jane@example.com", "password123", UserRole::Customer);
        let token = codec().issue(&user).unwrap();

        // Promoted after the token was minted
        let mut promoted = user.clone();
        promoted.role = UserRole::Admin;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user.id))
            .returning(move |_| Ok(Some(promoted.clone())));

        let resolved = authenticator(repo, false)
            .resolve_session(Some(&token.value))
            .await
            .unwrap();

        assert_eq!(resolved.id, user.id);
        assert!(resolved.is_admin());
    }

    #[tokio::test]
    async fn test_resolve_session_errors() {
        let user = user_with_password("jane@example.com", "password123", UserRole::Customer);
        let valid = codec().issue(&user).unwrap();
        let expired = codec()
            .issue_at(&user, Utc::now() - Duration::hours(25))
            .unwrap();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = authenticator(repo, false);

        assert!(matches!(
            service.resolve_session(None).await,
            Err(SessionError::MissingToken)
        ));
        assert!(matches!(
            service.resolve_session(Some("")).await,
            Err(SessionError::MissingToken)
        ));
        assert!(matches!(
            service.resolve_session(Some("garbage")).await,
            Err(SessionError::InvalidToken)
        ));
        assert!(matches!(
            service.resolve_session(Some(&expired.value)).await,
            Err(SessionError::InvalidToken)
        ));
        assert!(matches!(
            service.resolve_session(Some(&valid.value)).await,
            Err(SessionError::UserNotFound)
        ));
    }

    #[test]
    fn test_session_error_messages() {
        let err: AppError = SessionError::MissingToken.into();
        assert_eq!(err.to_string(), "Access denied. No token provided.");
        assert_eq!(err.status().as_u16(), 401);

        let err: AppError = SessionError::UserNotFound.into();
        assert_eq!(err.to_string(), "Invalid token. User not found.");
    }
}
