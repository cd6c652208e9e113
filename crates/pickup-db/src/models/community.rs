//! Community database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the communities table (archiver columns only)
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: Uuid,
    pub game_id: Option<Uuid>,
    pub archived: bool,
    pub archived_at: Option<DateTime<Utc>>,
}
