//! Domain entities

mod community;
mod game;

pub use community::Community;
pub use game::Game;
