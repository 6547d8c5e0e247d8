//! Travel mode and geometry precision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown travel mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel mode: {0} (expected driving, bicycling, transit or walking)")]
pub struct InvalidTravelMode(String);

/// Error returned when parsing an unknown precision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid precision: {0} (expected high or low)")]
pub struct InvalidPrecision(String);

/// How the route is travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Bicycling,
    Transit,
    Walking,
}

impl TravelMode {
    /// The lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
            TravelMode::Walking => "walking",
        }
    }
}

/// Case-insensitive: `DRIVING`, `Driving` and `driving` are the same mode.
impl FromStr for TravelMode {
    type Err = InvalidTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "bicycling" => Ok(TravelMode::Bicycling),
            "transit" => Ok(TravelMode::Transit),
            "walking" => Ok(TravelMode::Walking),
            _ => Err(InvalidTravelMode(s.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which geometry to decode from a route.
///
/// `Low` uses the route's single overview polyline; `High` stitches every
/// step polyline of every leg for full fidelity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    High,
    #[default]
    Low,
}

impl FromStr for Precision {
    type Err = InvalidPrecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Precision::High),
            "low" => Ok(Precision::Low),
            _ => Err(InvalidPrecision(s.to_string())),
        }
    }
}
