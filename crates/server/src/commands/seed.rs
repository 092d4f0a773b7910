//! Seed command - Sample data and bootstrap admin.

use crate::config::ServerConfig;
use crate::infra::{seed, Database};
use common::AppResult;

/// Execute the seed command
pub async fn execute(config: ServerConfig) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;

    if config.admin.is_none() {
        tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, no admin account will be created");
    }

    let report = seed::run(&db, config.admin.as_ref()).await?;
    tracing::info!(
        products_created = report.products_created,
        admin_created = report.admin_created,
        "Seed completed"
    );

    Ok(())
}
