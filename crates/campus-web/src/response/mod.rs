//! Error responses and redirect helpers
//!
//! Validation problems and guard denials never become errors here: handlers
//! turn them into a flash notice plus a redirect. Whatever reaches [`WebError`]
//! is an infrastructure failure and renders a plain 500 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use campus_common::AppError;
use campus_core::session::FlashLevel;
use campus_core::DomainError;
use campus_service::{DenialReason, ServiceError};
use thiserror::Error;
use tracing::error;

use crate::session::Session;

/// Web layer error type
#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Malformed upload: {0}")]
    Upload(String),

    #[error("Session layer not installed")]
    SessionMissing,

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl WebError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => StatusCode::from_u16(AppError::status_code_for(e))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Upload(_) => StatusCode::BAD_REQUEST,
            Self::Template(_) | Self::SessionMissing | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Error code used in logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Template(_) => "TEMPLATE_ERROR",
            Self::Upload(_) => "MALFORMED_UPLOAD",
            Self::SessionMissing => "SESSION_MISSING",
            Self::Session(_) => "SESSION_ERROR",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(code = self.error_code(), error = ?self, "Server error occurred");
            return (
                status,
                Html("<!doctype html><title>Server error</title><h1>Something went wrong</h1><p>Please try again later.</p>"),
            )
                .into_response();
        }

        (status, Html(format!("<!doctype html><title>Bad request</title><h1>{}</h1>", status))).into_response()
    }
}

/// Type alias for handler results
pub type WebResult<T> = Result<T, WebError>;

/// Queue a notice and redirect
pub async fn flash_redirect(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
    to: &str,
) -> WebResult<Response> {
    session.flash(level, message).await?;
    Ok(Redirect::to(to).into_response())
}

/// Redirect a request the guards turned away
pub async fn deny(session: &Session, reason: DenialReason) -> WebResult<Response> {
    session.push(reason.flash()).await?;
    Ok(Redirect::to(reason.redirect_to()).into_response())
}

/// Turn a failed create action into a danger notice and a redirect
///
/// Only validation failures are recoverable; anything else propagates.
pub async fn rejected(session: &Session, err: ServiceError, to: &str) -> WebResult<Response> {
    match err.validation_message() {
        Some(message) => flash_redirect(session, FlashLevel::Danger, message, to).await,
        None => Err(err.into()),
    }
}
