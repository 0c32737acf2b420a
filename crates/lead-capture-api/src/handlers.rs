//! API request handlers for lead capture

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_client::{Lead, LeadFields};
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppState;

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<lead_client::Error> for ApiError {
    fn from(err: lead_client::Error) -> Self {
        let status = match &err {
            lead_client::Error::InvalidLead(_) => StatusCode::BAD_REQUEST,
            lead_client::Error::Rejected { .. }
            | lead_client::Error::UnreadableRow(_)
            | lead_client::Error::Transport(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lead-capture-api"
    }))
}

/// Submit a lead from the website form
pub async fn submit_lead_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Lead>), ApiError> {
    let fields = LeadFields::from_json(payload).map_err(|e| {
        warn!("Rejected lead payload: {}", e);
        ApiError::from(e)
    })?;

    info!("Submitting lead with {} field(s)", fields.len());

    let lead = state.store.submit(fields).await?;

    Ok((StatusCode::CREATED, Json(lead)))
}
