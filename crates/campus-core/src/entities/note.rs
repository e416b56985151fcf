//! Note entity - shared study notes hosted on a drive

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::SeasonId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: i64,
    pub season_id: SeasonId,
    pub title: String,
    pub drive_link: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub season_id: SeasonId,
    pub title: String,
    pub drive_link: String,
    pub description: String,
}

impl NewNote {
    pub fn new(
        season_id: SeasonId,
        title: String,
        drive_link: String,
        description: Option<String>,
    ) -> Self {
        Self {
            season_id,
            title,
            drive_link,
            description: description.unwrap_or_default(),
        }
    }
}
