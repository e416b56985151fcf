//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid season id: {0}")]
    InvalidSeasonId(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Session store error: {0}")]
    SessionStoreError(String),
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSeasonId(_) => "INVALID_SEASON_ID",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::SessionStoreError(_) => "SESSION_STORE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSeasonId(_))
    }
}
