//! Folio Server binary
//!
//! Parses configuration, wires the HTTP client into the router, and serves.

use anyhow::{Context, Result};
use clap::Parser;
use folio_client::FolioClient;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_server::api;
use folio_server::config::Config;
use folio_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_server=debug,folio_client=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio server...");

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Listing repositories of {} via {}",
        config.github_user,
        config.github_api_url
    );
    tracing::info!("Contact form posts to {}", config.contact_endpoint);

    let client =
        Arc::new(FolioClient::new(config.endpoints()).context("Failed to create HTTP client")?);
    let state = AppState::new(config.owner_name.as_str(), client.clone(), client);

    // Build router with all views
    let app = api::create_router(state);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
