//! Product repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use common::{AppError, AppResult};
use domain::{price_to_cents, PageRequest, Product, ProductDraft, ProductSearch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of products, newest first, plus the total match count
    async fn find_page(
        &self,
        search: ProductSearch,
        page: PageRequest,
    ) -> AppResult<(Vec<Product>, u64)>;

    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Persist a new product
    async fn insert(&self, draft: ProductDraft) -> AppResult<Product>;

    /// Replace the mutable fields. `None` when the id is absent.
    async fn update(&self, id: Uuid, draft: ProductDraft) -> AppResult<Option<Product>>;

    /// Remove permanently. `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Overwrite the stored price. `None` when the id is absent.
    async fn update_price(&self, id: Uuid, price_cents: i64) -> AppResult<Option<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn cents(draft: &ProductDraft) -> AppResult<i64> {
    price_to_cents(draft.price()).ok_or_else(|| AppError::validation("Price is too large"))
}

/// Escape LIKE metacharacters so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_page(
        &self,
        search: ProductSearch,
        page: PageRequest,
    ) -> AppResult<(Vec<Product>, u64)> {
        let mut query = ProductEntity::find();
        if let Some(term) = search.term() {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(product::Column::Name)))
                    .like(LikeExpr::new(like_pattern(term)).escape('\\')),
            );
        }

        let total = query.clone().count(&self.db).await?;
        // Pages past the end are empty, whatever their number
        if page.offset() >= total {
            return Ok((Vec::new(), total));
        }

        let models = query
            .order_by_desc(product::Column::CreatedAt)
            .order_by_desc(product::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Product::from).collect(), total))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn insert(&self, draft: ProductDraft) -> AppResult<Product> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name().to_string()),
            price_cents: Set(cents(&draft)?),
            category: Set(draft.category().to_string()),
            description: Set(draft.description().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(&self, id: Uuid, draft: ProductDraft) -> AppResult<Option<Product>> {
        let Some(existing) = ProductEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(draft.name().to_string());
        active.price_cents = Set(cents(&draft)?);
        active.category = Set(draft.category().to_string());
        active.description = Set(draft.description().to_string());
        active.updated_at = Set(Utc::now());

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(Product::from(model))),
            // Deleted between the read and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(AppError::from(err)),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn update_price(&self, id: Uuid, price_cents: i64) -> AppResult<Option<Product>> {
        let active = ActiveModel {
            id: Set(id),
            price_cents: Set(price_cents),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(Product::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(AppError::from(err)),
        }
    }
}
