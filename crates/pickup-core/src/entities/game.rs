//! Game entity - a scheduled pickup game

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{GameId, GameSchedule};

/// Game entity (read-only for the archiver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub game_date: NaiveDate,
    pub start_time: NaiveTime,
}

impl Game {
    /// Create a new Game
    pub fn new(id: GameId, game_date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            id,
            game_date,
            start_time,
        }
    }

    /// The instant this game starts under the given timezone policy
    pub fn starts_at(&self, schedule: &GameSchedule) -> Result<DateTime<Utc>, DomainError> {
        schedule.start_instant(self.game_date, self.start_time)
    }

    /// True once `now` is strictly past the start instant
    pub fn has_started(
        &self,
        schedule: &GameSchedule,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        Ok(self.starts_at(schedule)? < now)
    }
}
