//! Lead Capture API
//!
//! HTTP front for the lead submission client, so the website's contact
//! form can post leads without holding store credentials.
//!
//! ## Endpoints
//!
//! - `POST /api/leads` - Persist a lead (JSON object body)
//! - `GET /health` - Health check

pub mod config;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use lead_client::LeadStore;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LeadStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/leads", post(handlers::submit_lead_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
