use thiserror::Error;

/// All errors that can occur in Vezor.
#[derive(Debug, Error)]
pub enum VezorError {
    // --- API client errors ---
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("secret '{name}' not found with specified tags")]
    SecretNotFound { name: String },

    // --- Provider errors ---
    #[error(
        "Missing API Key — set `api_key` in the provider configuration or the VEZOR_API_KEY environment variable"
    )]
    MissingApiKey,

    #[error("{summary}: {detail}")]
    DataSource {
        summary: &'static str,
        detail: String,
    },

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl VezorError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            VezorError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for Vezor results.
pub type Result<T> = std::result::Result<T, VezorError>;
