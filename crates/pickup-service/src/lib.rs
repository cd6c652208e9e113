//! # pickup-service
//!
//! Application layer: the archival sweep, its dependency container, and the
//! response DTOs the HTTP surface serializes.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

pub use dto::{HealthResponse, ReadinessResponse, SweepFailure, SweepResponse};
pub use services::{
    ArchiveService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SweepOutcome,
};
