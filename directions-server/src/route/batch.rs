//! Splitting long stop lists into service-sized requests.
//!
//! The directions service limits how many stops one request may carry. With
//! splitting enabled the full point list `[origin, ...stops, destination]`
//! is cut into consecutive windows; each window becomes one request whose
//! origin is the previous request's destination, so the pieces join into a
//! continuous path.

use std::iter;

use crate::domain::Waypoint;

/// Default number of points per request.
pub const DEFAULT_MAX_PER_BATCH: usize = 10;

/// Error from planning requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A window must hold at least an origin and a destination.
    #[error("batch size must be at least 2, got {0}")]
    BatchTooSmall(usize),
}

/// One directions request covering part of the route.
#[derive(Debug, Clone, PartialEq)]
pub struct SubRoute {
    pub origin: Waypoint,
    pub destination: Waypoint,
    /// Stops between origin and destination, in travel order.
    pub interior: Vec<Waypoint>,
    /// Position of this piece in the full route.
    pub sequence_index: usize,
}

/// Plan the requests needed for a route.
///
/// Without `split`, one request carries every stop regardless of
/// `max_per_batch`; the service rejects lists that are too long.
///
/// With `split`, the point list is cut into windows of `max_per_batch`
/// points. The first window starts at `origin`; later windows start at the
/// previous window's destination. Each window ends at its last point, so a
/// short final window promotes its last stop to destination. Every stop is
/// visited exactly once.
pub fn plan(
    origin: &Waypoint,
    destination: &Waypoint,
    stops: &[Waypoint],
    max_per_batch: usize,
    split: bool,
) -> Result<Vec<SubRoute>, PlanError> {
    if !split {
        return Ok(vec![SubRoute {
            origin: origin.clone(),
            destination: destination.clone(),
            interior: stops.to_vec(),
            sequence_index: 0,
        }]);
    }

    if max_per_batch < 2 {
        return Err(PlanError::BatchTooSmall(max_per_batch));
    }

    let points: Vec<&Waypoint> = iter::once(origin)
        .chain(stops)
        .chain(iter::once(destination))
        .collect();

    let mut sub_routes: Vec<SubRoute> = Vec::with_capacity(points.len().div_ceil(max_per_batch));

    for window in points.chunks(max_per_batch) {
        let (start, body) = match sub_routes.last() {
            Some(previous) => (previous.destination.clone(), window),
            None => (window[0].clone(), &window[1..]),
        };

        // Only empty for a one-point first window, which needs
        // max_per_batch < 2.
        let Some((end, interior)) = body.split_last() else {
            continue;
        };

        sub_routes.push(SubRoute {
            origin: start,
            destination: (*end).clone(),
            interior: interior.iter().map(|w| (*w).clone()).collect(),
            sequence_index: sub_routes.len(),
        });
    }

    Ok(sub_routes)
}
