//! Member entity - a person listed on the community roster

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Roster member with an uploaded photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub contact: String,
    /// Servable URL path of the stored photo
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub role: String,
    pub contact: String,
    pub photo_url: String,
}
