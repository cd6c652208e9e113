//! Database models - SQLx-compatible structs for PostgreSQL tables

mod community;
mod game;

pub use community::CommunityModel;
pub use game::GameModel;
