//! Service context - dependency container for services
//!
//! Holds the backend handles (repositories and health probe) and the
//! timezone policy. Built once at startup and injected into every service,
//! so tests can swap in an in-memory backend.

use std::sync::Arc;

use pickup_core::traits::{CommunityRepository, GameRepository, HealthProbe};
use pickup_core::GameSchedule;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    community_repo: Arc<dyn CommunityRepository>,
    game_repo: Arc<dyn GameRepository>,

    // Readiness
    health_probe: Arc<dyn HealthProbe>,

    // Policy
    schedule: GameSchedule,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        community_repo: Arc<dyn CommunityRepository>,
        game_repo: Arc<dyn GameRepository>,
        health_probe: Arc<dyn HealthProbe>,
        schedule: GameSchedule,
    ) -> Self {
        Self {
            community_repo,
            game_repo,
            health_probe,
            schedule,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the community repository
    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the backend health probe
    pub fn health_probe(&self) -> &dyn HealthProbe {
        self.health_probe.as_ref()
    }

    /// Timezone policy for game start instants
    pub fn schedule(&self) -> &GameSchedule {
        &self.schedule
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("schedule", &self.schedule)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    community_repo: Option<Arc<dyn CommunityRepository>>,
    game_repo: Option<Arc<dyn GameRepository>>,
    health_probe: Option<Arc<dyn HealthProbe>>,
    schedule: Option<GameSchedule>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn health_probe(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.health_probe = Some(probe);
        self
    }

    /// Defaults to UTC when not set
    pub fn schedule(mut self, schedule: GameSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.community_repo
                .ok_or_else(|| ServiceError::internal("community_repo is required"))?,
            self.game_repo
                .ok_or_else(|| ServiceError::internal("game_repo is required"))?,
            self.health_probe
                .ok_or_else(|| ServiceError::internal("health_probe is required"))?,
            self.schedule.unwrap_or_default(),
        ))
    }
}
