//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pickup-core.

mod community;
mod error;
mod game;
mod health;

pub use community::PgCommunityRepository;
pub use game::PgGameRepository;
pub use health::PgHealthProbe;
