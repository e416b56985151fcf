//! Application error types
//!
//! Errors raised outside the domain model: infrastructure and startup failures.

use campus_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("File storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Database(_)
            | Self::Session(_)
            | Self::Storage(_)
            | Self::Internal(_)
            | Self::Config(_) => 500,
        }
    }

    /// HTTP status code for a domain error
    #[must_use]
    pub fn status_code_for(e: &DomainError) -> u16 {
        if e.is_validation() {
            400
        } else {
            500
        }
    }

    /// Error code used in logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Session(_) => "SESSION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
