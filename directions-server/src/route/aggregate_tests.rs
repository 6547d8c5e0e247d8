//! Unit tests for route aggregation.

use super::*;
use crate::domain::Precision;
use crate::polyline::encode;
use crate::route::{PlanError, event_channel};
use crate::service::{
    DirectionsRequest, DirectionsResponse, EncodedPolyline, Leg, Measure, Route, Step,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng)
}

/// A successful response whose single leg follows `points`.
///
/// The overview keeps only the endpoints; the step carries every point.
fn ok_response(points: &[Coordinate], meters: f64, seconds: f64, fare: Option<Fare>) -> DirectionsResponse {
    let overview: Vec<Coordinate> = match points {
        [] => vec![],
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };

    DirectionsResponse {
        status: "OK".into(),
        error_message: None,
        routes: vec![Route {
            overview_polyline: EncodedPolyline::new(encode(&overview)),
            legs: vec![Leg {
                distance: Measure::new(meters),
                duration: Measure::new(seconds),
                duration_in_traffic: None,
                steps: vec![Step {
                    polyline: EncodedPolyline::new(encode(points)),
                }],
            }],
            fare,
        }],
    }
}

fn failed_response(message: &str) -> DirectionsResponse {
    DirectionsResponse {
        status: "NOT_FOUND".into(),
        error_message: Some(message.into()),
        routes: vec![],
    }
}

/// Scripted transport keyed by serialized origin.
struct ScriptedTransport {
    responses: HashMap<String, (Duration, DirectionsResponse)>,
    requests: Mutex<Vec<DirectionsRequest>>,
    barrier: Option<Arc<Barrier>>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
            barrier: None,
        }
    }

    fn respond(mut self, origin: &str, response: DirectionsResponse) -> Self {
        self.responses
            .insert(origin.to_string(), (Duration::ZERO, response));
        self
    }

    fn respond_after(mut self, origin: &str, delay_ms: u64, response: DirectionsResponse) -> Self {
        self.responses.insert(
            origin.to_string(),
            (Duration::from_millis(delay_ms), response),
        );
        self
    }

    /// Make every request wait until `n` requests are in flight.
    fn rendezvous(mut self, n: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(n)));
        self
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl DirectionsTransport for ScriptedTransport {
    async fn send(&self, request: &DirectionsRequest) -> Result<DirectionsResponse, DirectionsError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let origin = &request.query().unwrap().origin;
        let (delay, response) = self
            .responses
            .get(origin)
            .cloned()
            .ok_or_else(|| DirectionsError::Transport(format!("unexpected origin {origin}")))?;

        tokio::time::sleep(delay).await;
        Ok(response)
    }
}

/// Config splitting every stop into its own request.
fn split_config() -> RouteConfig {
    RouteConfig::new("key")
        .with_split_waypoints(true)
        .with_max_per_batch(2)
}

#[tokio::test]
async fn single_request_route() {
    let transport = ScriptedTransport::new().respond(
        "1,1",
        ok_response(&[coord(1.0, 1.0), coord(1.5, 1.5), coord(2.0, 2.0)], 5000.0, 120.0, None),
    );
    let config = RouteConfig::new("key");
    let request = RouteRequest::new(coord(1.0, 1.0), coord(2.0, 2.0));

    let result = RouteAggregator::new(&transport, &config)
        .aggregate(&request)
        .await
        .unwrap();

    assert_eq!(result.coordinates, vec![coord(1.0, 1.0), coord(2.0, 2.0)]);
    assert_eq!(result.distance_km, 5.0);
    assert_eq!(result.duration_min, 2.0);
    assert_eq!(result.fares, vec![None]);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn high_precision_uses_step_geometry() {
    let transport = ScriptedTransport::new().respond(
        "1,1",
        ok_response(&[coord(1.0, 1.0), coord(1.5, 1.5), coord(2.0, 2.0)], 1.0, 1.0, None),
    );
    let config = RouteConfig::new("key").with_precision(Precision::High);
    let request = RouteRequest::new(coord(1.0, 1.0), coord(2.0, 2.0));

    let result = RouteAggregator::new(&transport, &config)
        .aggregate(&request)
        .await
        .unwrap();

    assert_eq!(result.coordinates.len(), 3);
}

#[tokio::test]
async fn output_follows_sequence_not_completion_order() {
    // The first piece answers last.
    let transport = ScriptedTransport::new()
        .respond_after(
            "0,0",
            50,
            ok_response(&[coord(0.0, 0.0), coord(1.0, 1.0)], 1000.0, 60.0, None),
        )
        .respond(
            "1,1",
            ok_response(&[coord(1.0, 1.0), coord(2.0, 2.0)], 2000.0, 120.0, None),
        );
    let config = split_config();
    let request = RouteRequest::new(coord(0.0, 0.0), coord(2.0, 2.0))
        .with_stops(vec![coord(1.0, 1.0).into()]);

    let result = RouteAggregator::new(&transport, &config)
        .aggregate(&request)
        .await
        .unwrap();

    assert_eq!(
        result.coordinates,
        vec![coord(0.0, 0.0), coord(1.0, 1.0), coord(1.0, 1.0), coord(2.0, 2.0)]
    );
    assert_eq!(result.distance_km, 3.0);
    assert_eq!(result.duration_min, 3.0);
}

#[tokio::test]
async fn requests_are_sent_concurrently() {
    // Each request blocks until all three are in flight, so sequential
    // dispatch would never finish.
    let transport = ScriptedTransport::new()
        .rendezvous(3)
        .respond("0,0", ok_response(&[coord(0.0, 0.0)], 1.0, 1.0, None))
        .respond("1,1", ok_response(&[coord(1.0, 1.0)], 1.0, 1.0, None))
        .respond("3,3", ok_response(&[coord(3.0, 3.0)], 1.0, 1.0, None));
    let config = split_config();
    // Windows: [0, 1], [2, 3], [4] → requests from 0, 1 and 3
    let request = RouteRequest::new(coord(0.0, 0.0), coord(4.0, 4.0)).with_stops(vec![
        coord(1.0, 1.0).into(),
        coord(2.0, 2.0).into(),
        coord(3.0, 3.0).into(),
    ]);

    let aggregator = RouteAggregator::new(&transport, &config);
    let result = tokio::time::timeout(Duration::from_secs(5), aggregator.aggregate(&request))
        .await
        .expect("requests were not dispatched concurrently")
        .unwrap();

    assert_eq!(transport.request_count(), 3);
    assert_eq!(
        result.coordinates,
        vec![coord(0.0, 0.0), coord(1.0, 1.0), coord(3.0, 3.0)]
    );
}

#[tokio::test]
async fn fares_are_listed_per_request() {
    let fare = Fare {
        currency: Some("USD".into()),
        value: Some(2.75),
        text: Some("$2.75".into()),
    };
    let transport = ScriptedTransport::new()
        .respond("0,0", ok_response(&[coord(0.0, 0.0)], 1.0, 1.0, Some(fare.clone())))
        .respond("1,1", ok_response(&[coord(1.0, 1.0)], 1.0, 1.0, None));
    let config = split_config();
    let request = RouteRequest::new(coord(0.0, 0.0), coord(2.0, 2.0))
        .with_stops(vec![coord(1.0, 1.0).into()]);

    let result = RouteAggregator::new(&transport, &config)
        .aggregate(&request)
        .await
        .unwrap();

    assert_eq!(result.fares, vec![Some(fare), None]);
}

#[tokio::test]
async fn service_failure_fails_whole_route() {
    let transport = ScriptedTransport::new()
        .respond("0,0", ok_response(&[coord(0.0, 0.0)], 1.0, 1.0, None))
        .respond("1,1", failed_response("ZERO_RESULTS"));
    let config = split_config();
    let request = RouteRequest::new(coord(0.0, 0.0), coord(2.0, 2.0))
        .with_stops(vec![coord(1.0, 1.0).into()]);
    let (tx, mut rx) = event_channel();

    let err = RouteAggregator::new(&transport, &config)
        .with_events(tx)
        .aggregate(&request)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "ZERO_RESULTS");
    assert!(matches!(rx.recv().await, Some(RouteEvent::Started { .. })));
    assert_eq!(
        rx.recv().await,
        Some(RouteEvent::Failed("ZERO_RESULTS".into()))
    );
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn earliest_failure_is_reported() {
    // The later piece fails first in time; the earlier piece's error wins.
    let transport = ScriptedTransport::new()
        .respond_after("0,0", 50, failed_response("first"))
        .respond("1,1", failed_response("second"));
    let config = split_config();
    let request = RouteRequest::new(coord(0.0, 0.0), coord(2.0, 2.0))
        .with_stops(vec![coord(1.0, 1.0).into()]);

    let err = RouteAggregator::new(&transport, &config)
        .aggregate(&request)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "first");
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn transport_failure_fails_route() {
    let transport = ScriptedTransport::new();
    let config = RouteConfig::new("key");
    let request = RouteRequest::new("Nowhere", "Elsewhere");

    let err = RouteAggregator::new(&transport, &config)
        .aggregate(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Transport(_)));
}

#[tokio::test]
async fn success_events() {
    let transport = ScriptedTransport::new()
        .respond("0,0", ok_response(&[coord(0.0, 0.0)], 1000.0, 60.0, None))
        .respond("2,2", ok_response(&[coord(2.0, 2.0)], 1000.0, 60.0, None));
    let config = RouteConfig::new("key")
        .with_split_waypoints(true)
        .with_max_per_batch(3);
    let request = RouteRequest::new(coord(0.0, 0.0), coord(4.0, 4.0)).with_stops(vec![
        coord(1.0, 1.0).into(),
        coord(2.0, 2.0).into(),
        Waypoint::from("Somewhere"),
    ]);
    let (tx, mut rx) = event_channel();

    let result = RouteAggregator::new(&transport, &config)
        .with_events(tx)
        .aggregate(&request)
        .await
        .unwrap();

    assert_eq!(
        rx.recv().await,
        Some(RouteEvent::Started {
            origin: "0,0".into(),
            destination: "2,2".into(),
            waypoints: vec![coord(1.0, 1.0).into(), Waypoint::from("Somewhere")],
        })
    );
    assert_eq!(rx.recv().await, Some(RouteEvent::Ready(result)));
}

#[tokio::test]
async fn invalid_batch_size_is_reported() {
    let transport = ScriptedTransport::new();
    let config = RouteConfig::new("key")
        .with_split_waypoints(true)
        .with_max_per_batch(1);
    let request = RouteRequest::new("A", "B");
    let (tx, mut rx) = event_channel();

    let err = RouteAggregator::new(&transport, &config)
        .with_events(tx)
        .aggregate(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, DirectionsError::Plan(PlanError::BatchTooSmall(1))));
    assert!(matches!(rx.recv().await, Some(RouteEvent::Failed(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn dropped_receiver_is_ignored() {
    let transport = ScriptedTransport::new()
        .respond("A", ok_response(&[coord(0.0, 0.0)], 1.0, 1.0, None));
    let config = RouteConfig::new("key");
    let (tx, rx) = event_channel();
    drop(rx);

    let result = RouteAggregator::new(&transport, &config)
        .with_events(tx)
        .aggregate(&RouteRequest::new("A", "B"))
        .await;

    assert!(result.is_ok());
}

#[test]
fn fold_is_empty_for_no_segments() {
    let result = AggregateResult::from_segments(Vec::new());
    assert_eq!(result, AggregateResult::default());
}
