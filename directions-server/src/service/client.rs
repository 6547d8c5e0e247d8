//! Directions service HTTP client.
//!
//! Sends directions requests over HTTPS and parses the JSON answer. The API
//! key travels in the query string, so the client itself holds no secrets.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use super::error::DirectionsError;
use super::request::DirectionsRequest;
use super::transport::DirectionsTransport;
use super::types::DirectionsResponse;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparsable body to keep for diagnostics.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config with default limits.
    pub fn new() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Directions service HTTP client.
///
/// Uses a semaphore to limit concurrent requests when a long route is split
/// into many batches.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

impl DirectionsTransport for DirectionsClient {
    async fn send(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Transport("semaphore closed".to_string()))?;

        let builder = match request {
            DirectionsRequest::Query { base_url, query } => {
                debug!(
                    origin = %query.origin,
                    destination = %query.destination,
                    mode = %query.mode,
                    "Requesting directions"
                );
                self.http.get(base_url).query(&query.to_pairs())
            }
            DirectionsRequest::Exact { url } => {
                debug!(url = %url, "Requesting directions from exact URL");
                self.http.get(url)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_body(status.as_u16(), &body)
    }
}

/// Interpret a response body.
///
/// The service reports most failures inside a `200` JSON body, so the body
/// is parsed whatever the status; the HTTP status only matters when the body
/// is not a directions response at all.
fn parse_body(status: u16, body: &str) -> Result<DirectionsResponse, DirectionsError> {
    match serde_json::from_str(body) {
        Ok(response) => Ok(response),
        Err(_) if !(200..300).contains(&status) => Err(DirectionsError::Api {
            status,
            message: excerpt(body),
        }),
        Err(e) => Err(DirectionsError::Json {
            message: e.to_string(),
            body: Some(excerpt(body)),
        }),
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
