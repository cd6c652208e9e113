//! # pickup-core
//!
//! Domain layer for the pickup-sports archiver: communities, the games they
//! are tied to, the timezone policy for game start instants, and the
//! repository traits the backend adapters implement.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Community, Game};
pub use error::DomainError;
pub use traits::{CommunityRepository, GameRepository, HealthProbe, RepoResult};
pub use value_objects::{CommunityId, GameId, GameSchedule, IdParseError};
