//! Client for the remote lead store

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::{Lead, LeadFields, NewLead};

/// Collection leads are inserted into
pub const LEADS_COLLECTION: &str = "leads";

/// Deadline for the reachability probe
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Asks PostgREST for exactly one row as a bare object
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Anything that can persist a lead
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Persist one lead and return the stored row
    async fn submit(&self, fields: LeadFields) -> Result<Lead>;
}

/// Error body returned by the store on rejected requests
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP client for the remote store's `leads` collection
pub struct LeadClient {
    config: StoreConfig,
    client: reqwest::Client,
}

impl LeadClient {
    /// Create a new client from validated configuration
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Load configuration from the environment and build a client
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Insert a lead, stamping `source` and `updated_at`
    pub async fn submit(&self, fields: LeadFields) -> Result<Lead> {
        let payload = NewLead::new(fields, Utc::now());

        match self.insert(&payload).await {
            Ok(lead) => {
                info!("Lead submitted: {}", lead.id);
                Ok(lead)
            }
            Err(e) => {
                error!("Error submitting lead: {}", e);
                Err(e)
            }
        }
    }

    async fn insert(&self, payload: &NewLead) -> Result<Lead> {
        let url = self.config.rest_url(LEADS_COLLECTION);

        debug!("Inserting lead into store: {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
            .header(ACCEPT, SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(&[payload])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }

        // Row is committed past this point; decode errors are not transport errors.
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::UnreadableRow)
    }

    /// Check if the store is reachable with the configured key
    pub async fn health_check(&self) -> Result<bool> {
        self.health_check_with_timeout(HEALTH_CHECK_TIMEOUT).await
    }

    /// Same as [`health_check`](Self::health_check) with an explicit deadline
    pub async fn health_check_with_timeout(&self, timeout: Duration) -> Result<bool> {
        let url = self.config.rest_url("");
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
            .timeout(timeout)
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl LeadStore for LeadClient {
    async fn submit(&self, fields: LeadFields) -> Result<Lead> {
        LeadClient::submit(self, fields).await
    }
}

fn rejection(status: u16, body: &str) -> Error {
    match serde_json::from_str::<StoreErrorBody>(body) {
        Ok(parsed) => {
            let message = match (parsed.message, parsed.details) {
                (Some(m), Some(d)) => format!("{} ({})", m, d),
                (Some(m), None) => m,
                (None, Some(d)) => d,
                (None, None) => body.to_string(),
            };
            Error::Rejected {
                status,
                code: parsed.code,
                message,
            }
        }
        Err(_) => Error::Rejected {
            status,
            code: None,
            message: if body.is_empty() {
                "empty response body".to_string()
            } else {
                body.to_string()
            },
        },
    }
}
