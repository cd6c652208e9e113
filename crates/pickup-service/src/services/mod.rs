//! Business logic services

pub mod archive;
pub mod context;
pub mod error;

pub use archive::{ArchiveService, SweepOutcome};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
