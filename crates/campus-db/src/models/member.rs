//! Team member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub contact: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}
