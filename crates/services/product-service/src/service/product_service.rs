//! Product service - Catalog queries and admin mutations.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{price_to_cents, Discount, Page, PageRequest, Product, ProductDraft, ProductInput, ProductSearch};

use crate::repository::ProductRepository;

const PRODUCT: &str = "Product";

/// Outcome of a bulk discount.
#[derive(Debug, Clone)]
pub struct BulkPriceUpdate {
    pub updated: Vec<Product>,
}

impl BulkPriceUpdate {
    pub fn message(&self) -> String {
        format!("Updated {} product(s)", self.updated.len())
    }
}

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Paginated, optionally filtered listing (newest first)
    async fn list(&self, search: ProductSearch, page: PageRequest) -> AppResult<Page<Product>>;

    /// Get product by ID
    async fn get(&self, id: Uuid) -> AppResult<Product>;

    /// Validate and create a product
    async fn create(&self, input: ProductInput) -> AppResult<Product>;

    /// Validate and fully replace a product's mutable fields
    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Product>;

    /// Permanently delete a product
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Apply a percentage discount to every product found among `ids`.
    ///
    /// Missing ids are skipped and items are updated independently, so a
    /// failure part way leaves earlier items discounted.
    async fn bulk_update_price(&self, ids: Vec<Uuid>, discount_percent: Decimal)
        -> AppResult<BulkPriceUpdate>;
}

/// Concrete implementation of ProductService using repository.
pub struct Catalog {
    repo: Arc<dyn ProductRepository>,
}

impl Catalog {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for Catalog {
    async fn list(&self, search: ProductSearch, page: PageRequest) -> AppResult<Page<Product>> {
        tracing::debug!(search = ?search.term(), page = page.page(), limit = page.limit(), "Listing products");
        let (items, total) = self.repo.find_page(search, page).await?;
        Ok(Page::new(items, &page, total))
    }

    async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.repo.find_by_id(id).await?.ok_or_not_found(PRODUCT)
    }

    async fn create(&self, input: ProductInput) -> AppResult<Product> {
        let draft = ProductDraft::new(input)?;
        let product = self.repo.insert(draft).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Product> {
        let draft = ProductDraft::new(input)?;
        let product = self.repo.update(id, draft).await?.ok_or_not_found(PRODUCT)?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(PRODUCT));
        }

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn bulk_update_price(
        &self,
        ids: Vec<Uuid>,
        discount_percent: Decimal,
    ) -> AppResult<BulkPriceUpdate> {
        let discount = Discount::new(discount_percent)?;

        // A repeated id is discounted once
        let mut seen = HashSet::with_capacity(ids.len());
        let mut updated = Vec::with_capacity(ids.len());

        for id in ids.into_iter().filter(|id| seen.insert(*id)) {
            let Some(product) = self.repo.find_by_id(id).await? else {
                tracing::debug!(product_id = %id, "Bulk price update skipped missing product");
                continue;
            };

            let new_price = discount.apply(product.price);
            let cents = price_to_cents(new_price)
                .ok_or_else(|| AppError::internal("Discounted price out of range"))?;

            match self.repo.update_price(id, cents).await? {
                Some(product) => updated.push(product),
                None => tracing::debug!(product_id = %id, "Product vanished during bulk update"),
            }
        }

        tracing::info!(
            count = updated.len(),
            discount = %discount.percent(),
            "Bulk price update applied"
        );
        Ok(BulkPriceUpdate { updated })
    }
}
