//! Game database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the games table (schedule columns only)
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: Uuid,
    pub game_date: NaiveDate,
    pub start_time: NaiveTime,
}
