//! Configuration management for the Lead Capture API
//!
//! Server settings have defaults; store credentials do not. Loading fails
//! before anything binds if the store is not configured.

use anyhow::{Context, Result};
use lead_client::StoreConfig;
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub api_host: String,

    /// API server port
    pub api_port: u16,

    /// Remote store settings
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let store = StoreConfig::from_env().context("Remote store is not configured")?;

        let config = Config {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid API_PORT")?,

            store,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            anyhow::bail!("API_PORT must be greater than 0");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StoreConfig {
        StoreConfig::from_lookup(|name| match name {
            "STORE_URL" => Some("http://localhost:54321".to_string()),
            "STORE_ANON_KEY" => Some("anon".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_api_address() {
        let config = Config {
            api_host: "127.0.0.1".to_string(),
            api_port: 9000,
            store: store(),
        };

        assert_eq!(config.api_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = Config {
            api_host: "0.0.0.0".to_string(),
            api_port: 0,
            store: store(),
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("API_PORT must be greater than 0"));
    }
}
