//! Value objects - immutable, identity-less domain types

mod ids;
mod schedule;

pub use ids::{CommunityId, GameId, IdParseError};
pub use schedule::GameSchedule;
