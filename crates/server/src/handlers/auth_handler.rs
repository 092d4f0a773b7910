//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use auth_service_lib::SessionError;
use common::{AppError, AppResult};
use domain::{UserResponse, UserRole};

use super::rules;
use crate::extractors::{FieldOrder, ValidatedJson};
use crate::session;
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    /// User email address
    #[validate(custom(function = "rules::email"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (8 to 128 characters)
    #[validate(custom(function = "rules::new_password"))]
    #[schema(example = "SecurePass123!", min_length = 8, max_length = 128)]
    pub password: String,
    /// User display name
    #[validate(custom(function = "rules::person_name"))]
    #[schema(example = "Jane Doe", min_length = 2, max_length = 100)]
    pub name: String,
    /// Requested role, `customer` unless stated
    #[schema(example = "customer")]
    pub role: Option<UserRole>,
}

impl FieldOrder for RegisterRequest {
    const FIELDS: &'static [&'static str] = &["email", "password", "name"];
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    /// User email address
    #[validate(custom(function = "rules::email"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(custom(function = "rules::login_password"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl FieldOrder for LoginRequest {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

/// User plus a human readable outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: UserResponse,
}

/// Plain message body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, session cookie set", body = AuthResponse),
        (status = 400, description = "Validation error or user already exists"),
        (status = 403, description = "Admin registration is disabled")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let session = state
        .auth_service
        .register(&payload.email, &payload.password, &payload.name, payload.role)
        .await?;

    let jar = session::issue(
        jar,
        &state.session_cookie,
        session.token.value,
        state.auth_service.session_ttl(),
    );

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            user: UserResponse::from(session.user),
        }),
    ))
}

/// Log in and receive a session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = AuthResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let session = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let jar = session::issue(
        jar,
        &state.session_cookie,
        session.token.value,
        state.auth_service.session_ttl(),
    );

    Ok((
        jar,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(session.user),
        }),
    ))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (
        session::clear(jar, &state.session_cookie),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

/// Get the user behind the current session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("cookie_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "User not found")
    )
)]
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> AppResult<Json<UserResponse>> {
    let token = session::token(&jar, &state.session_cookie);

    let user = state
        .auth_service
        .resolve_session(token)
        .await
        .map_err(|e| match e {
            SessionError::UserNotFound => AppError::not_found("User"),
            other => AppError::from(other),
        })?;

    Ok(Json(UserResponse::from(user)))
}
