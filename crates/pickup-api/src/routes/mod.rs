//! Route definitions

use axum::{
    routing::{any, get},
    Router,
};

use crate::handlers::{archive, health};
use crate::state::AppState;

/// Path of the sweep trigger
pub const ARCHIVE_PATH: &str = "/archive-past-communities";

/// Create the main router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(ARCHIVE_PATH, any(archive::archive_past_communities))
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
