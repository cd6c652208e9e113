//! PostgREST implementation of GameRepository

use async_trait::async_trait;
use tracing::instrument;

use pickup_core::entities::Game;
use pickup_core::traits::{GameRepository, RepoResult};
use pickup_core::value_objects::GameId;

use crate::client::RestClient;
use crate::models::{GameRow, GAME_COLUMNS};

const TABLE: &str = "games";

/// PostgREST implementation of GameRepository
#[derive(Debug, Clone)]
pub struct RestGameRepository {
    client: RestClient,
}

impl RestGameRepository {
    /// Create a new RestGameRepository
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GameRepository for RestGameRepository {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<GameRow> = self
            .client
            .table(TABLE)
            .select(GAME_COLUMNS)
            .in_list("id", ids)
            .fetch()
            .await?;

        rows.into_iter().map(Game::try_from).collect()
    }
}
