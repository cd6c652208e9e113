//! Game model -> entity mapper

use pickup_core::entities::Game;
use pickup_core::value_objects::GameId;
use uuid::Uuid;

use crate::models::GameModel;

/// Convert GameModel to Game entity
impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game::new(GameId::new(model.id), model.game_date, model.start_time)
    }
}

/// Raw UUIDs for binding as a `uuid[]` parameter
pub fn game_ids_to_uuids(ids: &[GameId]) -> Vec<Uuid> {
    ids.iter().map(|id| id.into_inner()).collect()
}
