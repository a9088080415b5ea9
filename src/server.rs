//! HTTP server initialization and runtime setup.
//!
//! Loads and validates the seed document, builds the services over it and runs
//! the Axum server until Ctrl+C.

use crate::application::services::AuthSettings;
use crate::config::Config;
use crate::infrastructure::seed::SeedData;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Seed document (embedded, or `SEED_PATH`)
/// - In-memory repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The seed cannot be read or fails validation
/// - The default location is not part of the region map
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let seed = SeedData::load(config.seed_path.as_deref()).context("Failed to load seed data")?;
    tracing::info!(
        shelters = seed.shelters.len(),
        animals = seed.animals.len(),
        slots = seed.slots.len(),
        accounts = seed.accounts.len(),
        "Seed loaded"
    );

    config.validate_location(&seed.regions)?;

    let settings = AuthSettings {
        signing_secret: config.session_signing_secret.clone(),
        latency: config.auth_latency(),
        timeout: config.auth_timeout(),
        session_ttl: config.session_ttl(),
        default_location: config.default_location(),
    };

    let state = AppState::from_seed(seed, settings);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
