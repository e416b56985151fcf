//! Exam entity - a link to an externally hosted exam

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::SeasonId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    pub id: i64,
    pub season_id: SeasonId,
    pub title: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExam {
    pub season_id: SeasonId,
    pub title: String,
    pub link: String,
}
