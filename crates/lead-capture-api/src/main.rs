//! Lead Capture API
//!
//! REST API accepting website leads and persisting them to the remote store

use anyhow::{Context, Result};
use lead_capture_api::{config::Config, create_router, AppState};
use lead_client::LeadClient;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "lead_capture_api=debug,lead_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fails here, before binding, when the store is not configured
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting Lead Capture API");
    info!("Store: {:?}", config.store);

    let client = LeadClient::new(config.store.clone());

    match client.health_check().await {
        Ok(true) => info!("Remote store is reachable"),
        Ok(false) => warn!("Remote store returned non-success status"),
        Err(e) => warn!("Failed to reach remote store: {}", e),
    }

    let app = create_router(AppState::new(Arc::new(client)));

    // Bind and serve
    let addr = config.api_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    info!("Lead Capture API running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
