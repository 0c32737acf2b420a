//! Loading store configuration from the process environment
//!
//! Kept in its own test binary: it mutates process-wide variables.

use lead_client::{Error, LeadClient, StoreConfig, STORE_ANON_KEY_VAR, STORE_URL_VAR};
use std::env;

#[test]
fn test_from_env_requires_both_variables() {
    env::remove_var(STORE_URL_VAR);
    env::remove_var(STORE_ANON_KEY_VAR);

    let err = StoreConfig::from_env().unwrap_err();
    assert!(matches!(err, Error::MissingConfig("STORE_URL")));
    assert!(LeadClient::from_env().is_err());

    env::set_var(STORE_URL_VAR, "https://demo.store.example");
    let err = StoreConfig::from_env().unwrap_err();
    assert!(matches!(err, Error::MissingConfig("STORE_ANON_KEY")));

    env::set_var(STORE_ANON_KEY_VAR, "anon-key");
    let config = StoreConfig::from_env().expect("both variables set");
    assert_eq!(config.url.as_str(), "https://demo.store.example/");
    assert_eq!(config.anon_key, "anon-key");

    env::remove_var(STORE_URL_VAR);
    env::remove_var(STORE_ANON_KEY_VAR);
}
