//! Route endpoints and stops.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A point the route must pass through.
///
/// Either an explicit coordinate or an opaque location string (an address
/// or a `place_id:` reference) that the directions service resolves itself.
///
/// # Examples
///
/// ```
/// use directions_server::domain::{Coordinate, Waypoint};
///
/// let stop = Waypoint::parse("51.5074,-0.1278");
/// assert_eq!(stop, Waypoint::Coordinate(Coordinate::new(51.5074, -0.1278)));
///
/// let stop = Waypoint::parse("Trafalgar Square, London");
/// assert_eq!(stop.to_string(), "Trafalgar Square, London");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Waypoint {
    Coordinate(Coordinate),
    Location(String),
}

impl Waypoint {
    /// Interpret user text as a waypoint.
    ///
    /// Text of the form `"lat,lng"` becomes a coordinate; anything else is
    /// kept verbatim as a location string.
    pub fn parse(s: &str) -> Self {
        match Coordinate::parse(s) {
            Some(coord) => Waypoint::Coordinate(coord),
            None => Waypoint::Location(s.to_string()),
        }
    }

    /// The coordinate, if this waypoint has one.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Waypoint::Coordinate(coord) => Some(*coord),
            Waypoint::Location(_) => None,
        }
    }
}

/// Serializes the waypoint the way the directions service expects it.
impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Coordinate(coord) => coord.fmt(f),
            Waypoint::Location(location) => f.write_str(location),
        }
    }
}

impl From<Coordinate> for Waypoint {
    fn from(coord: Coordinate) -> Self {
        Waypoint::Coordinate(coord)
    }
}

impl From<&str> for Waypoint {
    fn from(location: &str) -> Self {
        Waypoint::Location(location.to_string())
    }
}

impl From<String> for Waypoint {
    fn from(location: String) -> Self {
        Waypoint::Location(location)
    }
}
