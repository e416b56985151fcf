//! Season identifier and per-request season selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Season shown when neither the query string nor the session names one
pub const DEFAULT_SEASON: SeasonId = SeasonId(3);

/// Integer identifier of a season
///
/// Classes, notes, exams, and posts reference seasons by this number only;
/// there is no foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(i64);

impl SeasonId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Resolve the active season for a content page
    ///
    /// Precedence: `season` query parameter, then the value remembered in the
    /// session, then [`DEFAULT_SEASON`]. An empty query value counts as absent.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSeasonId` when the query value is not an integer.
    pub fn resolve(query: Option<&str>, remembered: Option<SeasonId>) -> Result<Self, DomainError> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(raw) => raw.parse(),
            None => Ok(remembered.unwrap_or(DEFAULT_SEASON)),
        }
    }
}

impl Default for SeasonId {
    fn default() -> Self {
        DEFAULT_SEASON
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidSeasonId(s.to_string()))
    }
}

impl From<i64> for SeasonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
