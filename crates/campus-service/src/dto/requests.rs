//! Request shapes for form submissions
//!
//! Browser forms may omit fields entirely, so every field is optional at the
//! boundary; the services decide what is required and which notice to show.

use serde::Deserialize;
use validator::Validate;

use campus_core::value_objects::SeasonId;

use crate::services::{ServiceError, ServiceResult};

/// Notice for a season id that is missing or not an integer
pub const INVALID_SEASON_ID: &str = "Invalid Season ID.";

/// Trimmed value of a field, `None` when absent or blank
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Parse a submitted season id
pub(crate) fn parse_season_id(raw: Option<&String>) -> ServiceResult<SeasonId> {
    raw.and_then(|v| v.parse().ok())
        .ok_or_else(|| ServiceError::validation(INVALID_SEASON_ID))
}

/// `?season=` on content pages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
}

impl SeasonQuery {
    /// Build from raw query pairs; a repeated `season` keeps its first value
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let season = pairs
            .into_iter()
            .find(|(key, _)| key == "season")
            .map(|(_, value)| value);
        Self { season }
    }
}

/// Login form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Registration form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub password: Option<String>,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,
}

/// Admin: new season
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonForm {
    pub season_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Admin: new class
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassForm {
    pub season_id: Option<String>,
    pub class_name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Admin: new note
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteForm {
    pub season_id: Option<String>,
    pub title: Option<String>,
    pub drive_link: Option<String>,
    pub description: Option<String>,
}

/// Admin: new announcement post
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    pub season_id: Option<String>,
    pub title: Option<String>,
    pub enroll_link: Option<String>,
    pub image_url: Option<String>,
}

/// New exam link
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamForm {
    pub season_id: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
}

/// A file received in a multipart upload
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Name the browser reported; may be empty when no file was chosen
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Admin: new team member (multipart, assembled by the web layer)
#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub name: Option<String>,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub photo: Option<PhotoUpload>,
}
