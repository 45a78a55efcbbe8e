//! Custom error types for the admin panel

use thiserror::Error;

/// Failure reaching the API at all
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never completed (connection refused, DNS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other transport-level failure
    #[error("Transport error: {0}")]
    Other(String),
}

/// Custom error type for panel flows
#[derive(Error, Debug)]
pub enum PanelError {
    /// Request did not reach the server or the response was unreadable
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Server answered with an unexpected status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Type alias for panel results
pub type PanelResult<T> = Result<T, PanelError>;
