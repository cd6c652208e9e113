//! Repository implementations
//!
//! PostgREST implementations of the repository traits defined in pickup-core.

mod community;
mod game;
mod health;

pub use community::{RestCommunityRepository, ARCHIVE_CHUNK_SIZE};
pub use game::RestGameRepository;
pub use health::RestHealthProbe;
