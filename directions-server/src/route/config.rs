//! Route request configuration.

use crate::domain::{Precision, TravelMode};
use crate::service::Endpoint;

use super::batch::DEFAULT_MAX_PER_BATCH;

/// Default response language.
const DEFAULT_LANGUAGE: &str = "en";

/// Parameters shared by every request of a route.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// API key sent as the `key` parameter.
    pub api_key: String,

    /// Where requests go (defaults to the public directions service).
    pub endpoint: Endpoint,

    pub mode: TravelMode,

    /// Language for any text in the response.
    pub language: String,

    /// Region bias as a ccTLD code, e.g. `"uk"`.
    pub region: Option<String>,

    /// Which geometry to decode.
    pub precision: Precision,

    /// Let the service reorder interior stops.
    pub optimize_waypoints: bool,

    /// Split long stop lists into several requests.
    pub split_waypoints: bool,

    /// Points (endpoints included) per request when splitting.
    pub max_per_batch: usize,
}

impl RouteConfig {
    /// Create a config with the given API key and defaults otherwise.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_optimize_waypoints(mut self, optimize: bool) -> Self {
        self.optimize_waypoints = optimize;
        self
    }

    pub fn with_split_waypoints(mut self, split: bool) -> Self {
        self.split_waypoints = split;
        self
    }

    /// Set the batch size used when splitting.
    pub fn with_max_per_batch(mut self, n: usize) -> Self {
        self.max_per_batch = n;
        self
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: Endpoint::default(),
            mode: TravelMode::Driving,
            language: DEFAULT_LANGUAGE.to_string(),
            region: None,
            precision: Precision::Low,
            optimize_waypoints: false,
            split_waypoints: false,
            max_per_batch: DEFAULT_MAX_PER_BATCH,
        }
    }
}
