//! Authentication handlers
//!
//! Login, logout, and registration forms.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use campus_core::session::{FlashLevel, SessionData};
use campus_service::dto::{LoginForm, RegisterForm};
use campus_service::AuthService;

use super::render;
use crate::response::{flash_redirect, rejected, WebResult};
use crate::session::Session;
use crate::state::AppState;
use crate::views::Empty;

/// GET /login
pub async fn login_page(State(state): State<AppState>, session: Session) -> WebResult<Response> {
    render(&state, &session, "login.html", &Empty::default()).await
}

/// POST /login
///
/// A failed attempt re-renders the form with the notice rather than redirecting.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> WebResult<Response> {
    let outcome = AuthService::new(state.service_context()).login(form).await?;
    session.push(outcome.flash()).await?;

    match (outcome.username(), outcome.redirect_to()) {
        (Some(username), Some(to)) => {
            // A signed-in identity never keeps the id it had while anonymous
            session.cycle_id().await?;
            session.update(|data| data.sign_in(username)).await?;
            Ok(Redirect::to(to).into_response())
        }
        _ => render(&state, &session, "login.html", &Empty::default()).await,
    }
}

/// GET /logout
pub async fn logout(session: Session) -> WebResult<Response> {
    session.update(SessionData::sign_out).await?;
    flash_redirect(&session, FlashLevel::Info, "Logged out successfully.", "/").await
}

/// GET /register
pub async fn register_page(State(state): State<AppState>, session: Session) -> WebResult<Response> {
    render(&state, &session, "register.html", &Empty::default()).await
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> WebResult<Response> {
    match AuthService::new(state.service_context()).register(form).await {
        Ok(_) => flash_redirect(
            &session,
            FlashLevel::Success,
            "Registration successful! Please wait for admin approval.",
            "/login",
        )
        .await,
        Err(e) => rejected(&session, e, "/register").await,
    }
}
