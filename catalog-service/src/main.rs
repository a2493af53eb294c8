//! Catalog GraphQL Service
//!
//! Serves an in-memory catalog of authors and books over a single GraphQL
//! endpoint.
//!
//! ## Features
//!
//! - Author and book queries with nested relations
//! - Add, update and delete mutations
//! - Layered file and environment configuration
//! - Structured logging and tracing

use tokio::net::TcpListener;
use tracing::{error, info};

use catalog_service::{
    config::AppConfig,
    create_catalog_schema,
    error::AppResult,
    graphql::{GRAPHQL_PATH, router},
    tracing::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::get();

    Tracer::install(&config.tracing, &config.distribution)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or("unknown"),
    );

    start(config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let schema = create_catalog_schema(&config.catalog);
    let app = router(schema);

    let listener = TcpListener::bind(config.server.http_address).await?;

    info!(
        "GraphQL server started at http://{}{}",
        config.server.http_address, GRAPHQL_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("GraphQL server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
    }
}
