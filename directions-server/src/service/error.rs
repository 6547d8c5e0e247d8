//! Directions service error types.

use crate::polyline::DecodeError;
use crate::route::PlanError;

/// Message used when the service reports failure without explaining it.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors from requesting and interpreting directions.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// The service answered but reported failure (non-`OK` status or no
    /// routes). Displays the service's own message verbatim.
    #[error("{0}")]
    Service(String),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A non-HTTP transport could not produce a response
    #[error("transport error: {0}")]
    Transport(String),

    /// HTTP error status with a body that is not a directions response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Route geometry could not be decoded
    #[error("invalid route geometry: {0}")]
    Decode(#[from] DecodeError),

    /// Stops could not be split into requests
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl DirectionsError {
    /// Build a service error, falling back to a generic message.
    pub fn service(message: Option<&str>) -> Self {
        DirectionsError::Service(message.unwrap_or(UNKNOWN_ERROR).to_string())
    }
}
