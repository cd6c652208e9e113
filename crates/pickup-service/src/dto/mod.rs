//! Data transfer objects for the HTTP surface

mod responses;

pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, SweepFailure, SweepResponse};
