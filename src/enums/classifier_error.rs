use thiserror::Error;

/// Failures inside one classification call. Never leaves the gateway.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifierError {
    #[error("Missing API Key")]
    Configuration,

    #[error("HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("Unrecognized response format")]
    Format { raw: serde_json::Value },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Image decode error: {0}")]
    Decode(String),
}
