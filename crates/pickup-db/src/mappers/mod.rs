//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read from PostgreSQL, plus
//! the id-slice helpers used to bind `= ANY($1)` parameters.

mod community;
mod game;

pub use community::community_ids_to_uuids;
pub use game::game_ids_to_uuids;
