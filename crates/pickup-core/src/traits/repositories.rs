//! Repository traits (ports) - the backend query interface the archiver needs
//!
//! The domain layer defines what it needs and the infrastructure crates
//! (`pickup-db`, `pickup-rest`) provide the implementations. No method
//! assumes the backend can join tables; the sweep joins in memory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Community, Game};
use crate::error::DomainError;
use crate::value_objects::{CommunityId, GameId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// All communities with a non-null `game_id` that are not yet archived
    async fn find_unarchived_with_game(&self) -> RepoResult<Vec<Community>>;

    /// Set `archived = true, archived_at = at` on every listed community that
    /// is still unarchived. Returns the number of rows changed.
    async fn archive_many(&self, ids: &[CommunityId], at: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Games whose id is in `ids`. Unknown ids are simply absent.
    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Cheap round trip to the backend
    async fn ping(&self) -> RepoResult<()>;
}
