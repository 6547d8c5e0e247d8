//! Directions service response DTOs.
//!
//! These types map directly to the service's JSON. Missing arrays default to
//! empty and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Status value of a successful response.
pub const STATUS_OK: &str = "OK";

/// Top-level directions response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, or a failure code such as `ZERO_RESULTS` or `REQUEST_DENIED`.
    pub status: String,

    /// Human-readable explanation accompanying a failure status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Whether the service reported success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// One route from origin to destination through every waypoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    /// Smoothed shape of the whole route.
    #[serde(default)]
    pub overview_polyline: EncodedPolyline,

    /// One leg per origin→stop, stop→stop and stop→destination hop.
    #[serde(default)]
    pub legs: Vec<Leg>,

    /// Transit fare, when the service can price the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
}

/// A single hop of a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leg {
    /// Length in meters.
    pub distance: Measure,

    /// Travel time in seconds, ignoring traffic.
    pub duration: Measure,

    /// Travel time in seconds under current traffic (driving with a
    /// departure time only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_traffic: Option<Measure>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Leg {
    /// Travel time in seconds, preferring the traffic-aware figure.
    pub fn effective_duration(&self) -> f64 {
        self.duration_in_traffic
            .as_ref()
            .unwrap_or(&self.duration)
            .value
    }
}

/// One maneuver within a leg.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub polyline: EncodedPolyline,
}

/// A numeric quantity with its display text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Measure {
    pub fn new(value: f64) -> Self {
        Self { value, text: None }
    }
}

/// Encoded polyline text (see [`crate::polyline`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodedPolyline {
    #[serde(default)]
    pub points: String,
}

impl EncodedPolyline {
    pub fn new(points: impl Into<String>) -> Self {
        Self {
            points: points.into(),
        }
    }
}

/// Total transit fare for a route.
///
/// Passed through untouched; fares of separate requests are never summed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fare {
    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Amount in `currency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Formatted amount, e.g. `"$6.00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
