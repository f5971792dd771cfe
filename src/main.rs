use std::sync::Arc;

use showboard::{
    api::{create_router, AppState},
    config::Config,
    services::{CatalogProvider, TvMazeProvider},
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let catalog = Arc::new(TvMazeProvider::new(
        &config.catalog_api_url,
        config.request_timeout(),
    )?);
    tracing::info!(
        provider = catalog.name(),
        api_url = %config.catalog_api_url,
        "Catalog provider configured"
    );

    let state = AppState::new(catalog);

    // Warm the catalog; a failure here is retried on the first request.
    if let Err(e) = state.fetch_shows().await {
        tracing::warn!(error = %e, "Initial catalog fetch failed");
    }

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
