//! PostgreSQL implementation of CommunityRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::Community;
use pickup_core::traits::{CommunityRepository, RepoResult};
use pickup_core::value_objects::CommunityId;

use crate::mappers::community_ids_to_uuids;
use crate::models::CommunityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    /// Create a new PgCommunityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self))]
    async fn find_unarchived_with_game(&self) -> RepoResult<Vec<Community>> {
        let results = sqlx::query_as::<_, CommunityModel>(
            r#"
            SELECT id, game_id, archived, archived_at
            FROM communities
            WHERE game_id IS NOT NULL AND archived = false
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Community::from).collect())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn archive_many(&self, ids: &[CommunityId], at: DateTime<Utc>) -> RepoResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            UPDATE communities
            SET archived = true, archived_at = $2
            WHERE id = ANY($1) AND archived = false
            "#,
        )
        .bind(community_ids_to_uuids(ids))
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
