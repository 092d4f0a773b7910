//! Product handlers.
//!
//! Listing and single reads are public; every mutation sits behind the
//! admin layers applied in [`admin_product_routes`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    Page, PageRequest, Product, ProductInput, ProductSearch, DEFAULT_PAGE_NUMBER,
    DEFAULT_PAGE_SIZE,
};

use super::auth_handler::MessageResponse;
use super::rules;
use crate::extractors::{FieldOrder, ValidatedJson, ValidatedQuery};
use crate::middleware::{authenticate, require_admin};
use crate::state::AppState;

/// Listing query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// 1-based page number
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: Option<u64>,
    /// Page size
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub limit: Option<u64>,
    /// Case-insensitive substring of the product name, at most 200 characters once trimmed
    pub search: Option<String>,
}

impl FieldOrder for ListProductsQuery {
    const FIELDS: &'static [&'static str] = &["page", "limit"];
}

impl ListProductsQuery {
    fn page_request(&self) -> AppResult<PageRequest> {
        let page = self.page.unwrap_or(DEFAULT_PAGE_NUMBER);
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        Ok(PageRequest::new(page, limit)?)
    }

    fn search(&self) -> AppResult<ProductSearch> {
        Ok(ProductSearch::new(self.search.as_deref())?)
    }
}

/// Create or replace product request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductRequest {
    #[validate(custom(function = "rules::product_name"))]
    #[schema(example = "Widget", min_length = 2, max_length = 200)]
    pub name: String,
    /// Positive, at most two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "rules::price"))]
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    #[validate(custom(function = "rules::category"))]
    #[schema(example = "Tools", min_length = 2, max_length = 100)]
    pub category: String,
    #[validate(custom(function = "rules::description"))]
    #[schema(example = "A simple widget tool for home use", min_length = 10, max_length = 1000)]
    pub description: String,
}

impl FieldOrder for ProductRequest {
    const FIELDS: &'static [&'static str] = &["name", "price", "category", "description"];
}

impl From<ProductRequest> for ProductInput {
    fn from(req: ProductRequest) -> Self {
        ProductInput {
            name: req.name,
            price: req.price,
            category: req.category,
            description: req.description,
        }
    }
}

/// Bulk discount request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BulkUpdatePriceRequest {
    /// Product ids; unknown or malformed ids are skipped
    pub ids: Vec<String>,
    /// Percentage taken off every listed product, 0 to 100
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "rules::discount"))]
    #[schema(value_type = f64, example = 10)]
    pub discount_percent: Decimal,
}

impl FieldOrder for BulkUpdatePriceRequest {
    const FIELDS: &'static [&'static str] = &["ids", "discount_percent"];
}

/// One page of products
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl From<Page<Product>> for ProductListResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            products: page.items,
            current_page: page.page,
            total_pages: page.total_pages,
            total_products: page.total_items,
            has_next_page: page.has_next,
            has_prev_page: page.has_prev,
        }
    }
}

/// Products touched by a bulk discount
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdatePriceResponse {
    pub updated_products: Vec<Product>,
    #[schema(example = "Updated 2 product(s)")]
    pub message: String,
}

/// Public product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

/// Admin-only product routes
pub fn admin_product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/bulk-update-price", put(bulk_update_price))
        .route("/:id", put(update_product).delete(delete_product))
        // Outermost layer runs first: authenticate, then check the role
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

/// Malformed ids can never match a stored product
fn product_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("Product"))
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "One page of products", body = ProductListResponse),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListProductsQuery>,
) -> AppResult<Json<ProductListResponse>> {
    let page = state
        .product_service
        .list(query.search()?, query.page_request()?)
        .await?;

    Ok(Json(ProductListResponse::from(page)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get(product_id(&id)?).await?;
    Ok(Json(product))
}

/// Create a product (admin only)
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    security(("cookie_auth" = [])),
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields (admin only)
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    security(("cookie_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<Product>> {
    let product = state
        .product_service
        .update(product_id(&id)?, payload.into())
        .await?;

    Ok(Json(product))
}

/// Delete a product (admin only)
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    security(("cookie_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.product_service.delete(product_id(&id)?).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

/// Apply a percentage discount to many products (admin only)
#[utoipa::path(
    put,
    path = "/api/products/bulk-update-price",
    tag = "Products",
    security(("cookie_auth" = [])),
    request_body = BulkUpdatePriceRequest,
    responses(
        (status = 200, description = "Discount applied to every product found", body = BulkUpdatePriceResponse),
        (status = 400, description = "Discount out of range"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn bulk_update_price(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BulkUpdatePriceRequest>,
) -> AppResult<Json<BulkUpdatePriceResponse>> {
    let ids = payload
        .ids
        .iter()
        .filter_map(|raw| Uuid::parse_str(raw).ok())
        .collect();

    let result = state
        .product_service
        .bulk_update_price(ids, payload.discount_percent)
        .await?;

    let message = result.message();
    Ok(Json(BulkUpdatePriceResponse {
        updated_products: result.updated,
        message,
    }))
}
