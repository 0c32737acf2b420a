//! Lead Submission Client
//!
//! Persists prospective-customer contact records into the remote store's
//! `leads` collection. Every submission is stamped with `source = "website"`
//! and the current `updated_at`; the store assigns `id` and `created_at`.
//! Failures are logged and handed back to the caller without retrying.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{LeadClient, LeadStore, HEALTH_CHECK_TIMEOUT, LEADS_COLLECTION};
pub use config::{StoreConfig, STORE_ANON_KEY_VAR, STORE_URL_VAR};
pub use error::{Error, Result};
pub use models::{Lead, LeadFields, LeadId, NewLead, LEAD_SOURCE, RESERVED_FIELDS};
