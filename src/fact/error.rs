//! Error types for fact fetching.

use thiserror::Error;

/// Errors that can occur while fetching a fact.
#[derive(Debug, Error)]
pub enum FactError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Failed to reach the fact service
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Response body was not a fact
    #[error("Invalid response: {message}")]
    Decode { message: String },
}

impl FactError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            FactError::Client(_) => "Could not start the network client",
            FactError::Connection { .. } => "Could not reach the cat fact service",
            FactError::Timeout { .. } => "The cat fact service took too long",
            FactError::Upstream { .. } => "The cat fact service returned an error",
            FactError::Decode { .. } => "The cat fact service sent something odd",
        }
    }
}
