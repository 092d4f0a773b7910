//! Serve command - Starts the HTTP server.

use crate::cli::ServeArgs;
use crate::config::ServerConfig;
use crate::infra::Database;
use crate::routes::{cors_layer, create_router};
use crate::state::AppState;
use common::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: ServerConfig) -> AppResult<()> {
    tracing::info!("Starting server...");

    let db = Database::connect(&config.database).await?;

    let state = AppState::from_config(db, &config);
    let app = create_router(state, cors_layer(&config.cors_origin)?);

    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
