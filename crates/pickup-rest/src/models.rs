//! JSON row shapes returned by PostgREST and their entity conversions
//!
//! `date` and `time` columns arrive as strings (`2024-01-01`, `10:00:00`),
//! so game rows are converted fallibly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use pickup_core::entities::{Community, Game};
use pickup_core::value_objects::{CommunityId, GameId};
use pickup_core::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Columns selected for community reads
pub const COMMUNITY_COLUMNS: &str = "id,game_id,archived,archived_at";

/// Columns selected for game reads
pub const GAME_COLUMNS: &str = "id,game_date,start_time";

/// Row from the communities table
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityRow {
    pub id: Uuid,
    pub game_id: Option<Uuid>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

impl From<CommunityRow> for Community {
    fn from(row: CommunityRow) -> Self {
        Community {
            id: CommunityId::new(row.id),
            game_id: row.game_id.map(GameId::new),
            archived: row.archived,
            archived_at: row.archived_at,
        }
    }
}

/// Row from the games table
#[derive(Debug, Clone, Deserialize)]
pub struct GameRow {
    pub id: Uuid,
    pub game_date: String,
    pub start_time: String,
}

impl TryFrom<GameRow> for Game {
    type Error = DomainError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        Ok(Game::new(
            GameId::new(row.id),
            parse_game_date(&row.game_date)?,
            parse_start_time(&row.start_time)?,
        ))
    }
}

/// Projection used when only ids come back
#[derive(Debug, Clone, Deserialize)]
pub struct IdRow {
    pub id: Uuid,
}

/// Body of the archive `PATCH`
#[derive(Debug, Clone, Serialize)]
pub struct ArchivePatch {
    pub archived: bool,
    pub archived_at: DateTime<Utc>,
}

impl ArchivePatch {
    pub fn at(archived_at: DateTime<Utc>) -> Self {
        Self {
            archived: true,
            archived_at,
        }
    }
}

/// Parse a `YYYY-MM-DD` date column
pub fn parse_game_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::MalformedRecord(format!("invalid game_date: {raw}")))
}

/// Parse a `HH:MM`, `HH:MM:SS` or `HH:MM:SS.ffffff` time column
pub fn parse_start_time(raw: &str) -> Result<NaiveTime, DomainError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| DomainError::MalformedRecord(format!("invalid start_time: {raw}")))
}
