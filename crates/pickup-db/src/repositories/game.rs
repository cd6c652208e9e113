//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::Game;
use pickup_core::traits::{GameRepository, RepoResult};
use pickup_core::value_objects::GameId;

use crate::mappers::game_ids_to_uuids;
use crate::models::GameModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, GameModel>(
            r#"
            SELECT id, game_date, start_time
            FROM games
            WHERE id = ANY($1)
            "#,
        )
        .bind(game_ids_to_uuids(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }
}
