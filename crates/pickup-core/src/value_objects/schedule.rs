//! Timezone policy for game start instants
//!
//! Games store a calendar date and a time of day with no zone attached.
//! `GameSchedule` pins the zone to one fixed UTC offset so the computed start
//! instant never depends on the host's local timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Fixed-offset interpretation of a game's naive date and start time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSchedule {
    offset: FixedOffset,
}

impl GameSchedule {
    /// Interpret game times as UTC
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Interpret game times in the given offset
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Offset east of UTC, in seconds
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// Combine a date and a time of day into the instant the game starts
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSchedule` if the local time cannot be
    /// mapped to a single instant (only possible at the edges of the
    /// representable range).
    pub fn start_instant(
        &self,
        game_date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<DateTime<Utc>, DomainError> {
        let local = game_date.and_time(start_time);
        self.offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                DomainError::InvalidSchedule(format!("{local} has no single instant at {}", self.offset))
            })
    }
}

impl Default for GameSchedule {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for GameSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset)
    }
}

/// Parses `Z`, `UTC`, `+HH`, `+HHMM` and `+HH:MM` (or `-`)
impl FromStr for GameSchedule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }

        let invalid = || DomainError::InvalidSchedule(format!("invalid UTC offset: {s}"));

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };

        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (hours, minutes) = match digits.len() {
            2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
            4 => (
                digits[..2].parse::<i32>().map_err(|_| invalid())?,
                digits[2..].parse::<i32>().map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };

        if hours > 14 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::new)
            .ok_or_else(invalid)
    }
}
