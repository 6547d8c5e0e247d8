//! Route computation.
//!
//! This module turns an origin, a destination and any number of stops into
//! one continuous route: it plans service-sized requests, fetches them
//! concurrently through a [`crate::service::DirectionsTransport`], and
//! stitches distance, duration, fares and geometry back together in travel
//! order.

mod aggregate;
mod batch;
mod config;
mod events;
mod fetch;

pub use aggregate::{AggregateResult, RouteAggregator, RouteRequest};
pub use batch::{DEFAULT_MAX_PER_BATCH, PlanError, SubRoute, plan};
pub use config::RouteConfig;
pub use events::{EventReceiver, EventSender, RouteEvent, event_channel};
pub use fetch::{NO_ROUTES, RouteFetcher, RouteSegmentResult, build_request, segment_from_response};
