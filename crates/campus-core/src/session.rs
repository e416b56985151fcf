//! Browser session state
//!
//! The typed payload kept in each server-side session: who is signed in,
//! which season they last looked at, and pending flash notices.

use serde::{Deserialize, Serialize};

use crate::value_objects::{SeasonId, DEFAULT_SEASON};

/// Severity of a flash notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// One-time message shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Typed session payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Signed-in username; the admin is stored under the configured admin name
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub selected_season: Option<SeasonId>,
    #[serde(default)]
    pub flashes: Vec<Flash>,
}

impl SessionData {
    /// Record a successful sign-in and reset the season to the default
    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.user = Some(username.into());
        self.selected_season = Some(DEFAULT_SEASON);
    }

    /// Forget the signed-in user, keeping everything else
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn push_flash(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.flashes.push(Flash::new(level, message));
    }

    /// Remove and return all pending notices
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }
}
