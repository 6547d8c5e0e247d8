//! Combining sub-route requests into one route.
//!
//! The aggregator plans the requests, sends them all at once, waits for
//! every one to settle and folds the results in sequence order. Completion
//! order never affects the output, and a single failure fails the whole
//! route.

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{Coordinate, Waypoint};
use crate::service::{DirectionsError, DirectionsTransport, Fare};

use super::batch::{SubRoute, plan};
use super::config::RouteConfig;
use super::events::{EventSender, RouteEvent};
use super::fetch::{RouteFetcher, RouteSegmentResult};

/// A route to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    /// Stops between origin and destination, in travel order.
    pub stops: Vec<Waypoint>,
}

impl RouteRequest {
    /// Create a request with no intermediate stops.
    pub fn new(origin: impl Into<Waypoint>, destination: impl Into<Waypoint>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            stops: Vec::new(),
        }
    }

    /// Set the intermediate stops.
    pub fn with_stops(mut self, stops: Vec<Waypoint>) -> Self {
        self.stops = stops;
        self
    }
}

/// The whole route, stitched from every sub-route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    /// Path from origin to destination.
    pub coordinates: Vec<Coordinate>,
    pub distance_km: f64,
    pub duration_min: f64,
    /// One entry per sub-route, in order.
    pub fares: Vec<Option<Fare>>,
}

impl AggregateResult {
    /// Fold segments, already in sequence order, into one result.
    pub fn from_segments(segments: impl IntoIterator<Item = RouteSegmentResult>) -> Self {
        segments
            .into_iter()
            .fold(Self::default(), |mut acc, segment| {
                acc.coordinates.extend(segment.coordinates);
                acc.distance_km += segment.distance_km;
                acc.duration_min += segment.duration_min;
                acc.fares.push(segment.fare);
                acc
            })
    }
}

/// Computes routes of any length through a directions transport.
pub struct RouteAggregator<'a, T: DirectionsTransport> {
    transport: &'a T,
    config: &'a RouteConfig,
    events: Option<EventSender>,
}

impl<'a, T: DirectionsTransport> RouteAggregator<'a, T> {
    /// Create a new aggregator.
    pub fn new(transport: &'a T, config: &'a RouteConfig) -> Self {
        Self {
            transport,
            config,
            events: None,
        }
    }

    /// Report progress on the given channel.
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    /// Compute the route.
    ///
    /// On failure the error of the earliest failing sub-route is returned
    /// and no partial route is produced.
    pub async fn aggregate(&self, request: &RouteRequest) -> Result<AggregateResult, DirectionsError> {
        match self.run(request).await {
            Ok(result) => {
                info!(
                    points = result.coordinates.len(),
                    distance_km = result.distance_km,
                    duration_min = result.duration_min,
                    "Route ready"
                );
                self.emit(RouteEvent::Ready(result.clone()));
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "Route request failed");
                self.emit(RouteEvent::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    async fn run(&self, request: &RouteRequest) -> Result<AggregateResult, DirectionsError> {
        let sub_routes = plan(
            &request.origin,
            &request.destination,
            &request.stops,
            self.config.max_per_batch,
            self.config.split_waypoints,
        )?;

        debug!(
            stops = request.stops.len(),
            requests = sub_routes.len(),
            "Planned route requests"
        );

        self.emit_started(&sub_routes);

        let fetcher = RouteFetcher::new(self.transport, self.config);
        let pending = sub_routes.iter().map(|sub_route| {
            let fetcher = &fetcher;
            async move { (sub_route.sequence_index, fetcher.fetch(sub_route).await) }
        });

        let mut settled = join_all(pending).await;
        settled.sort_by_key(|(sequence_index, _)| *sequence_index);

        let segments = settled
            .into_iter()
            .map(|(_, result)| result)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AggregateResult::from_segments(segments))
    }

    fn emit_started(&self, sub_routes: &[SubRoute]) {
        let Some(first) = sub_routes.first() else {
            return;
        };

        self.emit(RouteEvent::Started {
            origin: first.origin.to_string(),
            destination: first.destination.to_string(),
            waypoints: sub_routes
                .iter()
                .flat_map(|sub_route| sub_route.interior.iter().cloned())
                .collect(),
        });
    }

    fn emit(&self, event: RouteEvent) {
        if let Some(events) = &self.events {
            // A dropped receiver only means nobody is listening.
            let _ = events.send(event);
        }
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
