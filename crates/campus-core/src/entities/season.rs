//! Season entity - one offering cycle of course content

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::SeasonId;

/// A numbered grouping of classes, notes, exams, and posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub id: i64,
    pub season_id: SeasonId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a season
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeason {
    pub season_id: SeasonId,
    pub title: String,
    pub description: String,
}

impl NewSeason {
    /// Create a new season record, an absent description becomes empty
    pub fn new(season_id: SeasonId, title: String, description: Option<String>) -> Self {
        Self {
            season_id,
            title,
            description: description.unwrap_or_default(),
        }
    }
}
