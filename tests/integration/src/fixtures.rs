//! Test fixtures and data generators

use chrono::{NaiveDate, NaiveTime};
use pickup_core::entities::Game;
use pickup_core::value_objects::{CommunityId, GameId};
use pickup_service::memory::InMemoryBackend;
use serde::Deserialize;

/// Path of the sweep trigger
pub const ARCHIVE_PATH: &str = "/archive-past-communities";

/// Successful sweep body
#[derive(Debug, Deserialize)]
pub struct SweepBody {
    pub success: bool,
    pub message: String,
    pub archived: u64,
}

/// Failed sweep body
#[derive(Debug, Deserialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

/// Readiness body, only the parts the tests look at
#[derive(Debug, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
}

/// Build a game from `YYYY-MM-DD` and `HH:MM`
pub fn game_at(date: &str, time: &str) -> Game {
    Game::new(
        GameId::random(),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        NaiveTime::parse_from_str(time, "%H:%M").expect("fixture time"),
    )
}

/// A game that has long started
pub fn past_game() -> Game {
    game_at("2024-01-01", "10:00")
}

/// A game far in the future
pub fn future_game() -> Game {
    game_at("2099-01-01", "10:00")
}

/// The three-community scenario
///
/// `a` belongs to a started game, `b` to a future game, `c` has no game.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub a: CommunityId,
    pub b: CommunityId,
    pub c: CommunityId,
}

impl Scenario {
    pub fn seed(backend: &InMemoryBackend) -> Self {
        let g1 = backend.add_game(past_game());
        let g2 = backend.add_game(future_game());
        Self {
            a: backend.add_community(Some(g1)),
            b: backend.add_community(Some(g2)),
            c: backend.add_community(None),
        }
    }
}
