//! Domain traits (ports)

mod repositories;

pub use repositories::{CommunityRepository, GameRepository, HealthProbe, RepoResult};
