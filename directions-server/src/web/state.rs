//! Application state for the web layer.

use std::sync::Arc;

use crate::route::RouteConfig;
use crate::service::ServiceTransport;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Transport to the directions service
    pub transport: Arc<ServiceTransport>,

    /// Defaults for every route request; query parameters override them
    pub config: Arc<RouteConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(transport: impl Into<ServiceTransport>, config: RouteConfig) -> Self {
        Self {
            transport: Arc::new(transport.into()),
            config: Arc::new(config),
        }
    }
}
