//! medicine-registry server entry point.
//!
//! Prepares the database and starts the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use medicine_registry::api;
use medicine_registry::app_state::AppState;
use medicine_registry::config::RegistryConfig;
use medicine_registry::persistence::{self, SqliteStore};
use medicine_registry::service::AssociationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RegistryConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        match_policy = %config.match_policy,
        "starting medicine-registry"
    );

    // Prepare storage: schema first, then reference data
    let store = SqliteStore::connect(&config)
        .await
        .context("failed to open database")?;
    store.migrate().await.context("schema migration failed")?;
    if config.seed_on_startup {
        persistence::seed(&store)
            .await
            .context("seeding reference data failed")?;
    }

    // Build service layer
    let association_service = Arc::new(AssociationService::new(store, config.match_policy));

    // Build application state and router
    let listen_addr = config.listen_addr;
    let app_state = AppState {
        association_service,
        config: Arc::new(config),
    };
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(addr = %listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
