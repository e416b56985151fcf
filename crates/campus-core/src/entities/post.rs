//! Post entity - an enrollment announcement on the home feed

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::SeasonId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub season_id: SeasonId,
    pub title: String,
    pub enroll_link: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub season_id: SeasonId,
    pub title: String,
    pub enroll_link: String,
    pub image_url: String,
}
