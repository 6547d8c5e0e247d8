//! Progress notifications for a route request.

use tokio::sync::mpsc;

use crate::domain::Waypoint;

use super::aggregate::AggregateResult;

/// Something that happened while computing a route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    /// Requests are about to be sent.
    ///
    /// `origin` and `destination` are the serialized endpoints of the first
    /// request; `waypoints` lists the interior stops of every request.
    Started {
        origin: String,
        destination: String,
        waypoints: Vec<Waypoint>,
    },

    /// Every request succeeded.
    Ready(AggregateResult),

    /// A request failed; no route is produced.
    Failed(String),
}

/// Sending half of an event channel.
pub type EventSender = mpsc::UnboundedSender<RouteEvent>;

/// Receiving half of an event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<RouteEvent>;

/// Create a channel for route events.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
