//! Domain types for route requests.
//!
//! Coordinates and waypoints are plain values: they are built by the caller
//! or by the polyline decoder and never mutated afterwards.

mod coordinate;
mod mode;
mod waypoint;

pub use coordinate::Coordinate;
pub use mode::{InvalidPrecision, InvalidTravelMode, Precision, TravelMode};
pub use waypoint::Waypoint;
