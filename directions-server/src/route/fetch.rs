//! Fetching a single piece of a route.

use tracing::debug;

use crate::domain::{Coordinate, Precision};
use crate::polyline;
use crate::service::{
    DirectionsError, DirectionsQuery, DirectionsRequest, DirectionsResponse, DirectionsTransport,
    Fare, Leg, format_waypoints,
};

use super::batch::SubRoute;
use super::config::RouteConfig;

/// Message used when a successful response carries no routes.
pub const NO_ROUTES: &str = "no routes returned";

/// Meters per kilometer.
const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute.
const SECONDS_PER_MIN: f64 = 60.0;

/// Distance, time and shape of one requested piece.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegmentResult {
    pub coordinates: Vec<Coordinate>,
    pub distance_km: f64,
    pub duration_min: f64,
    pub fare: Option<Fare>,
}

/// Issues the directions request for one [`SubRoute`].
pub struct RouteFetcher<'a, T: DirectionsTransport> {
    transport: &'a T,
    config: &'a RouteConfig,
}

impl<'a, T: DirectionsTransport> RouteFetcher<'a, T> {
    /// Create a new fetcher.
    pub fn new(transport: &'a T, config: &'a RouteConfig) -> Self {
        Self { transport, config }
    }

    /// Request one piece of the route and extract its summary.
    pub async fn fetch(&self, sub_route: &SubRoute) -> Result<RouteSegmentResult, DirectionsError> {
        let request = build_request(sub_route, self.config);
        let response = self.transport.send(&request).await?;
        let segment = segment_from_response(response, self.config.precision)?;

        debug!(
            sequence_index = sub_route.sequence_index,
            points = segment.coordinates.len(),
            distance_km = segment.distance_km,
            duration_min = segment.duration_min,
            "Fetched route segment"
        );

        Ok(segment)
    }
}

/// Describe the request for a sub-route.
pub fn build_request(sub_route: &SubRoute, config: &RouteConfig) -> DirectionsRequest {
    let query = DirectionsQuery {
        origin: sub_route.origin.to_string(),
        destination: sub_route.destination.to_string(),
        waypoints: format_waypoints(&sub_route.interior, config.optimize_waypoints),
        key: config.api_key.clone(),
        mode: config.mode,
        language: config.language.clone(),
        region: config.region.clone(),
    };

    DirectionsRequest::new(&config.endpoint, query)
}

/// Extract distance, duration, shape and fare from the first route.
///
/// Alternate routes are ignored. With [`Precision::Low`] the overview
/// polyline is decoded; with [`Precision::High`] every step polyline of
/// every leg is decoded in order.
pub fn segment_from_response(
    response: DirectionsResponse,
    precision: Precision,
) -> Result<RouteSegmentResult, DirectionsError> {
    if !response.is_ok() {
        return Err(DirectionsError::service(response.error_message.as_deref()));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| DirectionsError::Service(NO_ROUTES.to_string()))?;

    let meters: f64 = route.legs.iter().map(|leg| leg.distance.value).sum();
    let seconds: f64 = route.legs.iter().map(Leg::effective_duration).sum();

    let coordinates = match precision {
        Precision::Low => polyline::decode_segment(&route.overview_polyline.points)?,
        Precision::High => {
            let steps: Vec<&str> = route
                .legs
                .iter()
                .flat_map(|leg| &leg.steps)
                .map(|step| step.polyline.points.as_str())
                .collect();
            polyline::decode(&steps)?
        }
    };

    Ok(RouteSegmentResult {
        coordinates,
        distance_km: meters / METERS_PER_KM,
        duration_min: seconds / SECONDS_PER_MIN,
        fare: route.fare,
    })
}
