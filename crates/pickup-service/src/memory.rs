//! In-memory backend for tests
//!
//! Implements every repository trait over two vectors, with call counters
//! and an optional injected failure. Enabled for this crate's tests and for
//! downstream crates through the `test-util` feature.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pickup_core::entities::{Community, Game};
use pickup_core::traits::{CommunityRepository, GameRepository, HealthProbe, RepoResult};
use pickup_core::value_objects::{CommunityId, GameId};
use pickup_core::DomainError;

/// Backend call that should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    FindCommunities,
    FindGames,
    Archive,
    Ping,
}

/// In-memory stand-in for the managed backend
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    communities: Mutex<Vec<Community>>,
    games: Mutex<Vec<Game>>,
    fail_on: Mutex<Option<FailPoint>>,
    game_lookups: AtomicUsize,
    update_calls: AtomicUsize,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a game and return its id
    pub fn add_game(&self, game: Game) -> GameId {
        let id = game.id;
        lock(&self.games).push(game);
        id
    }

    /// Store a new unarchived community
    pub fn add_community(&self, game_id: Option<GameId>) -> CommunityId {
        let community = Community::new(CommunityId::random(), game_id);
        let id = community.id;
        lock(&self.communities).push(community);
        id
    }

    /// Store a community that was archived at `at`
    pub fn add_archived_community(&self, game_id: Option<GameId>, at: DateTime<Utc>) -> CommunityId {
        let mut community = Community::new(CommunityId::random(), game_id);
        community.archive(at);
        let id = community.id;
        lock(&self.communities).push(community);
        id
    }

    pub fn community(&self, id: CommunityId) -> Option<Community> {
        lock(&self.communities).iter().find(|c| c.id == id).cloned()
    }

    pub fn communities(&self) -> Vec<Community> {
        lock(&self.communities).clone()
    }

    /// Make every subsequent call at `point` fail with a backend error
    pub fn fail_on(&self, point: FailPoint) {
        *lock(&self.fail_on) = Some(point);
    }

    pub fn clear_failure(&self) {
        *lock(&self.fail_on) = None;
    }

    /// Number of `find_by_ids` calls seen
    pub fn game_lookups(&self) -> usize {
        self.game_lookups.load(Ordering::SeqCst)
    }

    /// Number of `archive_many` calls seen
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn check(&self, point: FailPoint) -> RepoResult<()> {
        if *lock(&self.fail_on) == Some(point) {
            return Err(DomainError::Backend(format!("injected failure at {point:?}")));
        }
        Ok(())
    }
}

#[async_trait]
impl CommunityRepository for InMemoryBackend {
    async fn find_unarchived_with_game(&self) -> RepoResult<Vec<Community>> {
        self.check(FailPoint::FindCommunities)?;
        Ok(lock(&self.communities)
            .iter()
            .filter(|c| c.is_archive_candidate())
            .cloned()
            .collect())
    }

    async fn archive_many(&self, ids: &[CommunityId], at: DateTime<Utc>) -> RepoResult<u64> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check(FailPoint::Archive)?;

        let mut changed = 0;
        for community in lock(&self.communities).iter_mut() {
            if ids.contains(&community.id) && community.archive(at) {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

#[async_trait]
impl GameRepository for InMemoryBackend {
    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>> {
        self.game_lookups.fetch_add(1, Ordering::SeqCst);
        self.check(FailPoint::FindGames)?;
        Ok(lock(&self.games)
            .iter()
            .filter(|g| ids.contains(&g.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HealthProbe for InMemoryBackend {
    async fn ping(&self) -> RepoResult<()> {
        self.check(FailPoint::Ping)
    }
}
