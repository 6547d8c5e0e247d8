//! Directions service access.
//!
//! This module provides the request model for the external directions
//! service, its JSON response types, and the transports that carry
//! requests: an HTTP client for the live service and a fixture transport
//! for offline use.
//!
//! Key characteristics of the service:
//! - Failures usually arrive as a `200` response whose `status` is not `OK`
//! - A single request accepts a limited number of interior stops
//! - Geometry is shipped as encoded polylines (see [`crate::polyline`])

mod client;
mod error;
mod fixture;
mod request;
mod transport;
mod types;

pub use client::{ClientConfig, DirectionsClient};
pub use error::{DirectionsError, UNKNOWN_ERROR};
pub use fixture::{Fixture, FixtureTransport};
pub use request::{
    DEFAULT_BASE_URL, DirectionsQuery, DirectionsRequest, Endpoint, format_waypoints,
};
pub use transport::{DirectionsTransport, ServiceTransport};
pub use types::{
    DirectionsResponse, EncodedPolyline, Fare, Leg, Measure, Route, STATUS_OK, Step,
};
