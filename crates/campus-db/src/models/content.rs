//! Season and season-scoped content models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for seasons table
#[derive(Debug, Clone, FromRow)]
pub struct SeasonModel {
    pub id: i64,
    pub season_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for classes table
#[derive(Debug, Clone, FromRow)]
pub struct ClassModel {
    pub id: i64,
    pub season_id: i64,
    pub class_name: String,
    pub description: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database model for notes table
#[derive(Debug, Clone, FromRow)]
pub struct NoteModel {
    pub id: i64,
    pub season_id: i64,
    pub title: String,
    pub drive_link: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for exams table
#[derive(Debug, Clone, FromRow)]
pub struct ExamModel {
    pub id: i64,
    pub season_id: i64,
    pub title: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub season_id: i64,
    pub title: String,
    pub enroll_link: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
