//! Access-control middleware.
//!
//! `authenticate` resolves the caller from the session cookie on every
//! request; `require_admin` then checks the resolved role. Public routes
//! carry neither layer.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use common::AppError;
use domain::{User, UserRole};

use crate::session;
use crate::state::AppState;

/// Identity resolved for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// Resolve the session cookie and attach [`CurrentUser`] to the request.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = session::token(&jar, &state.session_cookie);

    let user = state
        .auth_service
        .resolve_session(token)
        .await
        .map_err(|e| {
            tracing::warn!(path = %request.uri().path(), "Rejected session: {}", e);
            AppError::from(e)
        })?;

    request.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(request).await)
}

/// Reject callers that are not admins. Must run after [`authenticate`].
pub async fn require_admin(request: Request<Body>, next: Next) -> Result<Response, AppError> {
    let Some(user) = request.extensions().get::<CurrentUser>() else {
        return Err(AppError::unauthorized("Authentication required."));
    };

    if !user.is_admin() {
        tracing::warn!(user_id = %user.id, path = %request.uri().path(), "Admin access denied");
        return Err(AppError::forbidden("Admin access required."));
    }

    Ok(next.run(request).await)
}
