//! Outbound directions requests.

use crate::domain::{TravelMode, Waypoint};

/// Default directions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Prefix that asks the service to reorder interior stops.
const OPTIMIZE_PREFIX: &str = "optimize:true|";

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Base URL; route parameters are appended as a query string.
    Base(String),

    /// Complete URL requested as-is. The caller controls every parameter.
    Exact(String),
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::Base(DEFAULT_BASE_URL.to_string())
    }
}

/// Query parameters for one directions request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    /// Pipe-separated interior stops, possibly with the optimize prefix.
    pub waypoints: String,
    pub key: String,
    pub mode: TravelMode,
    pub language: String,
    pub region: Option<String>,
}

impl DirectionsQuery {
    /// Query pairs in the order they are sent.
    ///
    /// `departure_time=now` is always included so driving legs report
    /// `duration_in_traffic`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("origin", self.origin.clone()),
            ("waypoints", self.waypoints.clone()),
            ("destination", self.destination.clone()),
            ("key", self.key.clone()),
            ("mode", self.mode.as_str().to_string()),
            ("language", self.language.clone()),
        ];
        if let Some(region) = &self.region {
            pairs.push(("region", region.clone()));
        }
        pairs.push(("departure_time", "now".to_string()));
        pairs
    }
}

/// A fully described request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionsRequest {
    Query { base_url: String, query: DirectionsQuery },
    Exact { url: String },
}

impl DirectionsRequest {
    /// Combine an endpoint with route parameters.
    pub fn new(endpoint: &Endpoint, query: DirectionsQuery) -> Self {
        match endpoint {
            Endpoint::Base(base_url) => DirectionsRequest::Query {
                base_url: base_url.clone(),
                query,
            },
            Endpoint::Exact(url) => DirectionsRequest::Exact { url: url.clone() },
        }
    }

    /// The query parameters, unless the request is an exact URL.
    pub fn query(&self) -> Option<&DirectionsQuery> {
        match self {
            DirectionsRequest::Query { query, .. } => Some(query),
            DirectionsRequest::Exact { .. } => None,
        }
    }
}

/// Serialize interior stops as the `waypoints` parameter.
pub fn format_waypoints(interior: &[Waypoint], optimize: bool) -> String {
    let joined = interior
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|");

    if optimize {
        format!("{OPTIMIZE_PREFIX}{joined}")
    } else {
        joined
    }
}
