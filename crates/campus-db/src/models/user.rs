//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub student: bool,
    pub approved: bool,
    #[sqlx(default)]
    pub courses_access: Vec<String>,
    pub created_at: DateTime<Utc>,
}
