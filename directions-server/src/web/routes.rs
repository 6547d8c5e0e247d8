//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::route::RouteAggregator;
use crate::service::DirectionsError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/directions", get(directions))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute a route.
async fn directions(
    State(state): State<AppState>,
    Query(params): Query<DirectionsParams>,
) -> Result<Json<RouteResponse>, AppError> {
    let request = params.route_request()?;
    let config = params.route_config(&state.config)?;

    let result = RouteAggregator::new(state.transport.as_ref(), &config)
        .aggregate(&request)
        .await?;

    Ok(Json(result.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
}

impl From<InvalidParams> for AppError {
    fn from(e: InvalidParams) -> Self {
        AppError::BadRequest { message: e.0 }
    }
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        match e {
            DirectionsError::Plan(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        warn!(status = %status, error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
