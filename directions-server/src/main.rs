use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use directions_server::route::RouteConfig;
use directions_server::service::{
    ClientConfig, DirectionsClient, Endpoint, FixtureTransport, ServiceTransport,
};
use directions_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("DIRECTIONS_API_KEY").unwrap_or_else(|_| {
        warn!("DIRECTIONS_API_KEY not set. Live requests will be denied.");
        String::new()
    });

    let mut config = RouteConfig::new(api_key);
    if let Ok(base_url) = std::env::var("DIRECTIONS_BASE_URL") {
        config = config.with_endpoint(Endpoint::Base(base_url));
    }

    // Serve canned responses when a fixture directory is given
    let transport: ServiceTransport = match std::env::var("DIRECTIONS_FIXTURES") {
        Ok(dir) => {
            let fixtures = FixtureTransport::from_dir(&dir).expect("Failed to load fixtures");
            let count = fixtures.len().await;
            info!(dir = %dir, fixtures = count, "Using fixture transport");
            fixtures.into()
        }
        Err(_) => DirectionsClient::new(ClientConfig::default())
            .expect("Failed to create directions client")
            .into(),
    };

    let state = AppState::new(transport, config);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("DIRECTIONS_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("Invalid DIRECTIONS_ADDR");

    info!("Directions server listening on http://{addr}");
    info!("  GET /health      - Health check");
    info!("  GET /directions  - Compute a route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
