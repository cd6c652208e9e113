//! PostgREST implementation of CommunityRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use pickup_core::entities::Community;
use pickup_core::traits::{CommunityRepository, RepoResult};
use pickup_core::value_objects::CommunityId;

use crate::client::RestClient;
use crate::models::{ArchivePatch, CommunityRow, IdRow, COMMUNITY_COLUMNS};

const TABLE: &str = "communities";

/// Ids per `PATCH`. Keeps the `in.(…)` filter well under common URL limits
/// (a UUID list of this size is about 3.7 KB).
pub const ARCHIVE_CHUNK_SIZE: usize = 100;

/// PostgREST implementation of CommunityRepository
#[derive(Debug, Clone)]
pub struct RestCommunityRepository {
    client: RestClient,
}

impl RestCommunityRepository {
    /// Create a new RestCommunityRepository
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommunityRepository for RestCommunityRepository {
    #[instrument(skip(self))]
    async fn find_unarchived_with_game(&self) -> RepoResult<Vec<Community>> {
        let rows: Vec<CommunityRow> = self
            .client
            .table(TABLE)
            .select(COMMUNITY_COLUMNS)
            .not_null("game_id")
            .eq("archived", false)
            .fetch()
            .await?;

        Ok(rows.into_iter().map(Community::from).collect())
    }

    /// Large id sets are sent as several `PATCH` requests of at most
    /// [`ARCHIVE_CHUNK_SIZE`] ids. The first failing request aborts the call;
    /// chunks already applied stay archived and are not candidates next run.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn archive_many(&self, ids: &[CommunityId], at: DateTime<Utc>) -> RepoResult<u64> {
        let patch = ArchivePatch::at(at);
        let mut total = 0;

        for chunk in ids.chunks(ARCHIVE_CHUNK_SIZE) {
            let changed: Vec<IdRow> = self
                .client
                .table(TABLE)
                .select("id")
                .in_list("id", chunk)
                .eq("archived", false)
                .update(&patch)
                .await?;
            total += changed.len() as u64;
        }

        Ok(total)
    }
}
