//! OpenAPI documentation.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::product_handler::{
    BulkUpdatePriceRequest, BulkUpdatePriceResponse, ProductListResponse, ProductRequest,
};
use domain::{Product, UserResponse, UserRole, DEFAULT_SESSION_COOKIE_NAME};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::logout,
        crate::handlers::auth_handler::me,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::update_product,
        crate::handlers::product_handler::delete_product,
        crate::handlers::product_handler::bulk_update_price,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            MessageResponse,
            UserResponse,
            UserRole,
            Product,
            ProductRequest,
            ProductListResponse,
            BulkUpdatePriceRequest,
            BulkUpdatePriceResponse,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and session endpoints"),
        (name = "Products", description = "Catalog browsing and admin product management"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    DEFAULT_SESSION_COOKIE_NAME,
                ))),
            );
        }
    }
}
