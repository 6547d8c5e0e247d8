//! Pluggable transport for directions requests.

use std::future::Future;

use super::client::DirectionsClient;
use super::error::DirectionsError;
use super::fixture::FixtureTransport;
use super::request::DirectionsRequest;
use super::types::DirectionsResponse;

/// Something that can answer a directions request.
///
/// This abstraction allows route fetching to be tested with canned
/// responses and run offline.
pub trait DirectionsTransport: Send + Sync {
    /// Send one request and parse the service's answer.
    ///
    /// Only transport and parsing failures are errors here; a response
    /// whose `status` reports failure is returned as `Ok`.
    fn send(
        &self,
        request: &DirectionsRequest,
    ) -> impl Future<Output = Result<DirectionsResponse, DirectionsError>> + Send;
}

/// Transport chosen at startup.
#[derive(Debug, Clone)]
pub enum ServiceTransport {
    Http(DirectionsClient),
    Fixture(FixtureTransport),
}

impl DirectionsTransport for ServiceTransport {
    async fn send(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        match self {
            ServiceTransport::Http(client) => client.send(request).await,
            ServiceTransport::Fixture(fixtures) => fixtures.send(request).await,
        }
    }
}

impl From<DirectionsClient> for ServiceTransport {
    fn from(client: DirectionsClient) -> Self {
        ServiceTransport::Http(client)
    }
}

impl From<FixtureTransport> for ServiceTransport {
    fn from(fixtures: FixtureTransport) -> Self {
        ServiceTransport::Fixture(fixtures)
    }
}
