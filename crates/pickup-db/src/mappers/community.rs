//! Community model -> entity mapper

use pickup_core::entities::Community;
use pickup_core::value_objects::{CommunityId, GameId};
use uuid::Uuid;

use crate::models::CommunityModel;

/// Convert CommunityModel to Community entity
impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: CommunityId::new(model.id),
            game_id: model.game_id.map(GameId::new),
            archived: model.archived,
            archived_at: model.archived_at,
        }
    }
}

/// Raw UUIDs for binding as a `uuid[]` parameter
pub fn community_ids_to_uuids(ids: &[CommunityId]) -> Vec<Uuid> {
    ids.iter().map(|id| id.into_inner()).collect()
}
