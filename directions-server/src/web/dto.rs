//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Precision, TravelMode, Waypoint};
use crate::route::{AggregateResult, RouteConfig, RouteRequest};
use crate::service::Fare;

/// Query parameters of `GET /directions`.
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsParams {
    /// `"lat,lng"` or an address
    pub origin: String,

    /// `"lat,lng"` or an address
    pub destination: String,

    /// Pipe-separated stops, e.g. `"51.5,-0.12|Oxford"`
    pub waypoints: Option<String>,

    /// driving, bicycling, transit or walking (any case)
    pub mode: Option<String>,

    /// high or low
    pub precision: Option<String>,

    pub language: Option<String>,

    pub region: Option<String>,

    /// Let the service reorder stops
    pub optimize: Option<bool>,

    /// Split long stop lists into several requests
    pub split: Option<bool>,
}

/// A query parameter that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidParams(pub String);

impl DirectionsParams {
    /// The route described by the parameters.
    pub fn route_request(&self) -> Result<RouteRequest, InvalidParams> {
        if self.origin.trim().is_empty() {
            return Err(InvalidParams("origin is required".to_string()));
        }
        if self.destination.trim().is_empty() {
            return Err(InvalidParams("destination is required".to_string()));
        }

        let stops = self
            .waypoints
            .as_deref()
            .unwrap_or_default()
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Waypoint::parse)
            .collect();

        Ok(RouteRequest::new(
            Waypoint::parse(self.origin.trim()),
            Waypoint::parse(self.destination.trim()),
        )
        .with_stops(stops))
    }

    /// Apply the parameters on top of the server defaults.
    pub fn route_config(&self, defaults: &RouteConfig) -> Result<RouteConfig, InvalidParams> {
        let mut config = defaults.clone();

        if let Some(mode) = &self.mode {
            config.mode = mode
                .parse::<TravelMode>()
                .map_err(|e| InvalidParams(e.to_string()))?;
        }
        if let Some(precision) = &self.precision {
            config.precision = precision
                .parse::<Precision>()
                .map_err(|e| InvalidParams(e.to_string()))?;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(region) = &self.region {
            config.region = Some(region.clone());
        }
        if let Some(optimize) = self.optimize {
            config.optimize_waypoints = optimize;
        }
        if let Some(split) = self.split {
            config.split_waypoints = split;
        }

        Ok(config)
    }
}

/// A computed route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Path from origin to destination
    pub coordinates: Vec<Coordinate>,

    /// Total distance in kilometers
    pub distance_km: f64,

    /// Total duration in minutes
    pub duration_min: f64,

    /// Fare of each request, in order (null where unpriced)
    pub fares: Vec<Option<Fare>>,
}

impl From<AggregateResult> for RouteResponse {
    fn from(result: AggregateResult) -> Self {
        Self {
            coordinates: result.coordinates,
            distance_km: result.distance_km,
            duration_min: result.duration_min,
            fares: result.fares,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
