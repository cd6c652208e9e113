//! Response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::SweepOutcome;

/// Body returned when a sweep completes
#[derive(Debug, Clone, Serialize)]
pub struct SweepResponse {
    pub success: bool,
    pub message: String,
    pub archived: u64,
}

impl From<&SweepOutcome> for SweepResponse {
    fn from(outcome: &SweepOutcome) -> Self {
        Self {
            success: true,
            message: outcome.message(),
            archived: outcome.archived,
        }
    }
}

/// Body returned when a sweep aborts
#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    pub success: bool,
    pub error: String,
}

impl SweepFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub backend: String,
}

impl ReadinessResponse {
    pub fn ready(backend_healthy: bool) -> Self {
        Self {
            status: if backend_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                backend: if backend_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
