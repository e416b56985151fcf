//! Content pages
//!
//! `/` and `/members` are public; classes, notes, and exams need a login.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_service::dto::SeasonQuery;
use campus_service::{require_login, ContentService};
use serde::Serialize;

use super::{guard, remember_season, render};
use crate::response::WebResult;
use crate::session::Session;
use crate::state::AppState;
use crate::views::Empty;

#[derive(Serialize)]
struct MembersPage {
    members: Vec<campus_core::entities::Member>,
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebResult<Response> {
    let query = SeasonQuery::from_pairs(pairs);
    let season = remember_season(&state, &session, &query).await?;
    let page = ContentService::new(state.service_context()).home(season).await?;
    render(&state, &session, "home.html", &page).await
}

/// GET /class
pub async fn classes(
    State(state): State<AppState>,
    session: Session,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebResult<Response> {
    let query = SeasonQuery::from_pairs(pairs);
    if let Some(denied) = guard(&state, &session, require_login).await? {
        return Ok(denied);
    }

    let season = remember_season(&state, &session, &query).await?;
    let page = ContentService::new(state.service_context())
        .classes(season)
        .await?;
    render(&state, &session, "class.html", &page).await
}

/// GET /notes
pub async fn notes(
    State(state): State<AppState>,
    session: Session,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebResult<Response> {
    let query = SeasonQuery::from_pairs(pairs);
    if let Some(denied) = guard(&state, &session, require_login).await? {
        return Ok(denied);
    }

    let season = remember_season(&state, &session, &query).await?;
    let page = ContentService::new(state.service_context())
        .notes(season)
        .await?;
    render(&state, &session, "notes.html", &page).await
}

/// GET /exams
pub async fn exams(
    State(state): State<AppState>,
    session: Session,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebResult<Response> {
    let query = SeasonQuery::from_pairs(pairs);
    if let Some(denied) = guard(&state, &session, require_login).await? {
        return Ok(denied);
    }

    let season = remember_season(&state, &session, &query).await?;
    let page = ContentService::new(state.service_context())
        .exams(season)
        .await?;
    render(&state, &session, "exams.html", &page).await
}

/// GET /members
pub async fn members(State(state): State<AppState>, session: Session) -> WebResult<Response> {
    let members = ContentService::new(state.service_context()).members().await?;
    render(&state, &session, "members.html", &MembersPage { members }).await
}

/// Fallback for unknown routes
pub async fn not_found(State(state): State<AppState>, session: Session) -> WebResult<Response> {
    let page = render(&state, &session, "404.html", &Empty::default()).await?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}
