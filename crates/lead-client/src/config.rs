//! Remote store configuration
//!
//! Both variables are required. Loading fails immediately when either is
//! missing, so no client can be built against an unconfigured store.

use reqwest::Url;
use std::env;
use std::fmt;

use crate::error::{Error, Result};

/// Environment variable holding the store base URL
pub const STORE_URL_VAR: &str = "STORE_URL";

/// Environment variable holding the store anonymous access key
pub const STORE_ANON_KEY_VAR: &str = "STORE_ANON_KEY";

/// Validated connection settings for the remote store
#[derive(Clone)]
pub struct StoreConfig {
    /// Base URL of the store (scheme + host, optional path prefix)
    pub url: Url,

    /// Anonymous access key sent with every request
    pub anon_key: String,
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = required(&lookup, STORE_URL_VAR)?;
        let anon_key = required(&lookup, STORE_ANON_KEY_VAR)?;

        let url = Url::parse(&raw_url).map_err(|e| Error::InvalidConfig {
            name: STORE_URL_VAR,
            reason: e.to_string(),
        })?;

        let config = StoreConfig { url, anon_key };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match self.url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidConfig {
                    name: STORE_URL_VAR,
                    reason: format!("unsupported scheme '{}'", other),
                })
            }
        }

        if self.url.cannot_be_a_base() {
            return Err(Error::InvalidConfig {
                name: STORE_URL_VAR,
                reason: "not a base URL".to_string(),
            });
        }

        Ok(())
    }

    /// URL of a REST resource under `/rest/v1/`
    pub fn rest_url(&self, resource: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.url.as_str().trim_end_matches('/'),
            resource
        )
    }
}

// Keep the key out of logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::MissingConfig(name)),
    }
}
