//! # pickup-api
//!
//! HTTP trigger surface for the archival sweep, built with Axum, plus the
//! optional in-process scheduler.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod scheduler;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
