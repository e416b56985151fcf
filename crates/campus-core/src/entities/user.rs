//! User entity - a registered site account

use chrono::{DateTime, Utc};

/// Registered account
///
/// Accounts are created unapproved and without student status; both flags
/// are flipped outside this application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub student: bool,
    pub approved: bool,
    pub courses_access: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account may sign in
    #[inline]
    pub fn can_login(&self) -> bool {
        self.student && self.approved
    }
}

/// Values for inserting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub student: bool,
    pub approved: bool,
    pub courses_access: Vec<String>,
}

impl NewUser {
    /// Create a pending registration: not a student, not approved, no course access
    pub fn pending(username: String, password_hash: String, email: String) -> Self {
        Self {
            username,
            password_hash,
            email,
            student: false,
            approved: false,
            courses_access: Vec::new(),
        }
    }
}
