//! Web layer for the directions server.
//!
//! Provides a JSON endpoint that computes routes for map clients.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
