use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("Invalid {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    #[error("Invalid lead: {0}")]
    InvalidLead(String),

    #[error("Store rejected insert ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Store accepted insert but returned an unreadable row: {0}")]
    UnreadableRow(#[source] serde_json::Error),

    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised while loading configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingConfig(_) | Error::InvalidConfig { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
