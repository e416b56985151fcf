//! Class entity - a recorded or live class session within a season

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{to_embed_link, SeasonId};

/// Class entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub id: i64,
    pub season_id: SeasonId,
    pub class_name: String,
    pub description: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Class {
    /// Embeddable form of the video link, computed on every read
    ///
    /// Records inserted through the admin panel already hold an embed link,
    /// older records may not; normalising again is a no-op for the former.
    pub fn embed_link(&self) -> Option<String> {
        self.link.as_deref().map(to_embed_link)
    }
}

/// Values for inserting a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub season_id: SeasonId,
    pub class_name: String,
    pub description: String,
    pub link: Option<String>,
}

impl NewClass {
    /// Create a new class record, normalising the video link once at write time
    pub fn new(
        season_id: SeasonId,
        class_name: String,
        description: Option<String>,
        link: Option<&str>,
    ) -> Self {
        let link = link
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(to_embed_link);

        Self {
            season_id,
            class_name,
            description: description.unwrap_or_default(),
            link,
        }
    }
}
