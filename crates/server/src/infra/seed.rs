//! Sample catalog data and the optional bootstrap admin.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use auth_service_lib::store::{UserRepository, UserStore};
use common::{AppError, AppResult};
use domain::{PageRequest, ProductInput, ProductSearch, Registration, UserRole};
use product_service_lib::repository::ProductStore;
use product_service_lib::service::{Catalog, ProductService};

use super::Database;
use crate::config::AdminAccount;

/// (name, price, category, description)
const SAMPLE_PRODUCTS: [(&str, &str, &str, &str); 10] = [
    ("Laptop Computer", "999.99", "Electronics", "High-performance laptop for work and gaming"),
    ("Wireless Headphones", "199.99", "Electronics", "Premium noise-cancelling headphones"),
    ("Coffee Maker", "89.99", "Home", "Automatic drip coffee maker with timer"),
    ("Running Shoes", "129.99", "Sports", "Comfortable running shoes for all terrains"),
    ("Smartphone", "699.99", "Electronics", "Latest model smartphone with advanced camera"),
    ("Yoga Mat", "39.99", "Sports", "Non-slip yoga mat for home workouts"),
    ("Desk Chair", "249.99", "Furniture", "Ergonomic office chair with lumbar support"),
    ("Water Bottle", "24.99", "Sports", "Insulated stainless steel water bottle"),
    ("Cookbook", "29.99", "Books", "Collection of healthy recipes"),
    ("Plant Pot", "19.99", "Home", "Ceramic plant pot for indoor plants"),
];

/// What a seed run changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub products_created: usize,
    pub admin_created: bool,
}

/// Insert the sample products when the catalog is empty, then make sure the
/// configured admin account exists.
pub async fn run(db: &Database, admin: Option<&AdminAccount>) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    let catalog = Catalog::new(Arc::new(ProductStore::new(db.get_connection())));
    let existing = catalog
        .list(ProductSearch::default(), PageRequest::default())
        .await?
        .total_items;

    if existing > 0 {
        tracing::info!(existing, "Products already exist, skipping sample data");
    } else {
        for (name, price, category, description) in SAMPLE_PRODUCTS {
            let price = Decimal::from_str(price).map_err(|e| AppError::internal(e.to_string()))?;
            catalog
                .create(ProductInput {
                    name: name.to_string(),
                    price,
                    category: category.to_string(),
                    description: description.to_string(),
                })
                .await?;
            report.products_created += 1;
        }
        tracing::info!(count = report.products_created, "Created sample products");
    }

    if let Some(admin) = admin {
        report.admin_created = ensure_admin(db, admin).await?;
    }

    Ok(report)
}

/// Create the admin account unless the email is already registered.
async fn ensure_admin(db: &Database, admin: &AdminAccount) -> AppResult<bool> {
    let users = UserStore::new(db.get_connection());
    let registration = Registration::new(
        &admin.email,
        &admin.password,
        &admin.name,
        Some(UserRole::Admin),
    )?;

    if users.find_by_email(&registration.email).await?.is_some() {
        tracing::info!(email = %registration.email, "Admin account already exists");
        return Ok(false);
    }

    let user = users.create(registration.into_new_user()).await?;
    tracing::info!(user_id = %user.id, email = %user.email, "Created admin account");
    Ok(true)
}
