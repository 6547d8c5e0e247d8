//! Fixture transport for running without API access.
//!
//! Loads canned directions responses from JSON files and serves them as if
//! they were live answers, keyed by the serialized origin and destination.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use super::error::DirectionsError;
use super::request::DirectionsRequest;
use super::transport::DirectionsTransport;
use super::types::DirectionsResponse;

/// One canned answer, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Serialized origin exactly as sent, e.g. `"52.52,13.405"`.
    pub origin: String,
    /// Serialized destination exactly as sent.
    pub destination: String,
    pub response: DirectionsResponse,
}

type FixtureKey = (String, String);

/// Transport that serves responses from memory.
#[derive(Debug, Clone, Default)]
pub struct FixtureTransport {
    responses: Arc<RwLock<HashMap<FixtureKey, DirectionsResponse>>>,
}

impl FixtureTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in a directory.
    ///
    /// Each file holds one [`Fixture`].
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let responses = load_dir(data_dir.as_ref())?;

        Ok(Self {
            responses: Arc::new(RwLock::new(responses)),
        })
    }

    /// Register a response for an origin/destination pair.
    pub async fn insert(
        &self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        response: DirectionsResponse,
    ) {
        let mut responses = self.responses.write().await;
        responses.insert((origin.into(), destination.into()), response);
    }

    /// Number of loaded fixtures.
    pub async fn len(&self) -> usize {
        self.responses.read().await.len()
    }

    /// Whether no fixtures are loaded.
    pub async fn is_empty(&self) -> bool {
        self.responses.read().await.is_empty()
    }

    /// Reload fixtures from disk (useful for development).
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<(), DirectionsError> {
        let fresh = load_dir(data_dir.as_ref())?;
        let mut responses = self.responses.write().await;
        *responses = fresh;
        Ok(())
    }
}

impl DirectionsTransport for FixtureTransport {
    async fn send(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let query = request.query().ok_or_else(|| {
            DirectionsError::Transport(
                "fixture transport cannot serve exact URL requests".to_string(),
            )
        })?;

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            "Serving directions from fixtures"
        );

        let responses = self.responses.read().await;
        responses
            .get(&(query.origin.clone(), query.destination.clone()))
            .cloned()
            .ok_or_else(|| {
                DirectionsError::Transport(format!(
                    "no fixture for {} -> {}",
                    query.origin, query.destination
                ))
            })
    }
}

fn load_dir(data_dir: &Path) -> Result<HashMap<FixtureKey, DirectionsResponse>, DirectionsError> {
    let mut responses = HashMap::new();

    let entries = std::fs::read_dir(data_dir).map_err(|e| {
        DirectionsError::Transport(format!(
            "failed to read fixture directory {:?}: {}",
            data_dir, e
        ))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            DirectionsError::Transport(format!("failed to read directory entry: {}", e))
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let json = std::fs::read_to_string(&path).map_err(|e| {
            DirectionsError::Transport(format!("failed to read {:?}: {}", path, e))
        })?;

        let fixture: Fixture = serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
            message: format!("{:?}: {}", path, e),
            body: None,
        })?;

        responses.insert((fixture.origin, fixture.destination), fixture.response);
    }

    if responses.is_empty() {
        return Err(DirectionsError::Transport(format!(
            "no fixture files found in {:?}",
            data_dir
        )));
    }

    Ok(responses)
}
