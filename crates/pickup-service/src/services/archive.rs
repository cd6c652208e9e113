//! Archive service
//!
//! Marks communities archived once the game they belong to has started.
//!
//! A sweep is three sequential backend calls:
//! 1. read every unarchived community that has a game,
//! 2. read those games by id,
//! 3. archive the eligible communities in one batched update.
//!
//! Games are joined to communities in memory. A community whose game row is
//! missing is skipped and picked up again by a later sweep. Eligibility is
//! `start < now`, evaluated against a single `now` captured at the start of
//! the sweep, which is also the `archived_at` written. Re-running a sweep is
//! harmless: archived rows are never candidates and the update only touches
//! rows that are still unarchived.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use pickup_core::entities::{Community, Game};
use pickup_core::value_objects::{CommunityId, GameId};
use pickup_core::{DomainError, GameSchedule};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of one sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    /// The `now` used for eligibility and `archived_at`
    pub ran_at: DateTime<Utc>,
    /// Unarchived communities with a game
    pub candidates: usize,
    /// Candidates whose game had started
    pub eligible: usize,
    /// Candidates whose game row was not found
    pub skipped: usize,
    /// Rows the backend reports as changed
    pub archived: u64,
}

impl SweepOutcome {
    fn empty(ran_at: DateTime<Utc>) -> Self {
        Self {
            ran_at,
            candidates: 0,
            eligible: 0,
            skipped: 0,
            archived: 0,
        }
    }

    /// Human-readable summary for the response body
    pub fn message(&self) -> String {
        match (self.candidates, self.archived) {
            (0, _) => "No communities to archive".to_string(),
            (_, 0) => "No communities eligible for archival".to_string(),
            (_, 1) => "Archived 1 community".to_string(),
            (_, n) => format!("Archived {n} communities"),
        }
    }
}

/// Candidates split by eligibility
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Eligibility {
    pub eligible: Vec<CommunityId>,
    pub skipped: Vec<CommunityId>,
}

/// Archive service
pub struct ArchiveService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArchiveService<'a> {
    /// Create a new ArchiveService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run a sweep against the current wall clock
    pub async fn sweep(&self) -> ServiceResult<SweepOutcome> {
        self.sweep_at(Utc::now()).await
    }

    /// Run a sweep as if the current time were `now`
    #[instrument(skip(self))]
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> ServiceResult<SweepOutcome> {
        let candidates = self.ctx.community_repo().find_unarchived_with_game().await?;
        if candidates.is_empty() {
            info!("No communities to archive");
            return Ok(SweepOutcome::empty(now));
        }

        let game_ids = distinct_game_ids(&candidates);
        let games = self.ctx.game_repo().find_by_ids(&game_ids).await?;
        debug!(
            candidates = candidates.len(),
            games_requested = game_ids.len(),
            games_found = games.len(),
            "Fetched sweep inputs"
        );

        let split = partition_eligible(&candidates, &games, self.ctx.schedule(), now)?;
        for id in &split.skipped {
            debug!(community_id = %id, "Skipping community with no matching game");
        }

        let mut outcome = SweepOutcome {
            ran_at: now,
            candidates: candidates.len(),
            eligible: split.eligible.len(),
            skipped: split.skipped.len(),
            archived: 0,
        };

        if split.eligible.is_empty() {
            info!(candidates = outcome.candidates, "No communities eligible for archival");
            return Ok(outcome);
        }

        outcome.archived = self
            .ctx
            .community_repo()
            .archive_many(&split.eligible, now)
            .await?;

        info!(
            candidates = outcome.candidates,
            eligible = outcome.eligible,
            skipped = outcome.skipped,
            archived = outcome.archived,
            "Archived communities for started games"
        );

        Ok(outcome)
    }
}

/// Game ids referenced by the candidates, deduplicated
fn distinct_game_ids(candidates: &[Community]) -> Vec<GameId> {
    candidates
        .iter()
        .filter_map(|c| c.game_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Split candidates into eligible and skipped
///
/// Communities that are not archive candidates (no game, or already
/// archived) are ignored even if the backend returned them.
pub(crate) fn partition_eligible(
    candidates: &[Community],
    games: &[Game],
    schedule: &GameSchedule,
    now: DateTime<Utc>,
) -> Result<Eligibility, DomainError> {
    let by_id: HashMap<GameId, &Game> = games.iter().map(|g| (g.id, g)).collect();
    let mut split = Eligibility::default();

    for community in candidates.iter().filter(|c| c.is_archive_candidate()) {
        let Some(game) = community.game_id.and_then(|id| by_id.get(&id)) else {
            split.skipped.push(community.id);
            continue;
        };

        if game.has_started(schedule, now)? {
            split.eligible.push(community.id);
        }
    }

    Ok(split)
}
