//! Route configuration.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{AppError, AppResult};

use crate::handlers::{admin_product_routes, auth_routes, health_routes, product_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Auth routes (session handling is done per handler)
        .nest("/api/auth", auth_routes())
        // Product routes (public reads, admin mutations)
        .nest(
            "/api/products",
            product_routes().merge(admin_product_routes(state.clone())),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the single browser origin; credentials are needed for the cookie.
pub fn cors_layer(origin: &str) -> AppResult<CorsLayer> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| AppError::internal(format!("Invalid CORS_ORIGIN: {}", origin)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true))
}
