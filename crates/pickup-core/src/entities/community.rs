//! Community entity - a group chat optionally tied to a scheduled game

use chrono::{DateTime, Utc};

use crate::value_objects::{CommunityId, GameId};

/// Community entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: CommunityId,
    pub game_id: Option<GameId>,
    pub archived: bool,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Community {
    /// Create a new, unarchived community
    pub fn new(id: CommunityId, game_id: Option<GameId>) -> Self {
        Self {
            id,
            game_id,
            archived: false,
            archived_at: None,
        }
    }

    /// Whether the archival sweep should consider this community at all
    ///
    /// Communities without a game are never auto-archived.
    pub fn is_archive_candidate(&self) -> bool {
        self.game_id.is_some() && !self.archived
    }

    /// Mark archived at the given instant. Already archived communities keep
    /// their original timestamp.
    pub fn archive(&mut self, at: DateTime<Utc>) -> bool {
        if self.archived {
            return false;
        }
        self.archived = true;
        self.archived_at = Some(at);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_requires_game() {
        let community = Community::new(CommunityId::random(), None);
        assert!(!community.is_archive_candidate());

        let community = Community::new(CommunityId::random(), Some(GameId::random()));
        assert!(community.is_archive_candidate());
    }

    #[test]
    fn test_archived_is_not_candidate() {
        let mut community = Community::new(CommunityId::random(), Some(GameId::random()));
        assert!(community.archive(Utc::now()));
        assert!(!community.is_archive_candidate());
    }

    #[test]
    fn test_archive_keeps_first_timestamp() {
        let mut community = Community::new(CommunityId::random(), Some(GameId::random()));
        let first = Utc::now();
        assert!(community.archive(first));
        assert!(!community.archive(first + chrono::Duration::hours(1)));
        assert_eq!(community.archived_at, Some(first));
    }
}
