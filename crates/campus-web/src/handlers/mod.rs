//! Route handlers
//!
//! Every handler follows one shape: guard, then service call, then either a
//! rendered page or a flash notice plus a redirect.

pub mod admin;
pub mod auth;
pub mod health;
pub mod pages;

use axum::response::{IntoResponse, Response};
use campus_core::session::FlashLevel;
use campus_core::value_objects::SeasonId;
use campus_service::dto::requests::INVALID_SEASON_ID;
use campus_service::dto::SeasonQuery;
use campus_service::{select_season, AccessDecision, RequestContext};
use serde::Serialize;

use crate::response::{deny, WebResult};
use crate::session::Session;
use crate::state::AppState;
use crate::views::Layout;

/// Run an access guard; `Some` holds the redirect for a denied request
pub(crate) async fn guard(
    state: &AppState,
    session: &Session,
    check: fn(&RequestContext) -> AccessDecision,
) -> WebResult<Option<Response>> {
    match check(&session.request_context(state.admin()).await?) {
        AccessDecision::Allowed => Ok(None),
        AccessDecision::Denied(reason) => deny(session, reason).await.map(Some),
    }
}

/// Resolve the season for a content page and remember it in the session
pub(crate) async fn remember_season(
    state: &AppState,
    session: &Session,
    query: &SeasonQuery,
) -> WebResult<SeasonId> {
    let selection = select_season(query, &session.request_context(state.admin()).await?);

    if selection.should_remember() {
        session
            .update(|data| data.selected_season = Some(selection.season))
            .await?;
    } else {
        session.flash(FlashLevel::Danger, INVALID_SEASON_ID).await?;
    }

    Ok(selection.season)
}

/// Render a page with the base layout
pub(crate) async fn render<T: Serialize>(
    state: &AppState,
    session: &Session,
    template: &str,
    page: &T,
) -> WebResult<Response> {
    let layout = Layout::from_session(session, state.admin()).await?;
    Ok(state.views().render(template, &layout, page)?.into_response())
}
