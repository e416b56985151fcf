//! Route definitions
//!
//! Pages and admin actions run inside the session layer; health probes and
//! static files do not.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{admin, auth, health, pages};
use crate::session::session_layer;
use crate::state::AppState;

/// Create the main router
pub fn create_router(state: &AppState) -> Router<AppState> {
    let static_dir = ServeDir::new(&state.config().storage.static_dir);

    Router::new()
        .merge(health_routes())
        .nest_service(campus_common::STATIC_URL_PREFIX, static_dir)
        .merge(site_routes(state))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Session-backed pages, forms, and the 404 fallback
fn site_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(admin_routes())
        .fallback(pages::not_found)
        .layer(session_layer(state.sessions().clone(), state.config()))
}

/// Content pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/class", get(pages::classes))
        .route("/notes", get(pages::notes))
        .route("/exams", get(pages::exams))
        .route("/members", get(pages::members))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register", get(auth::register_page).post(auth::register))
}

/// Admin panel routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::panel))
        .route("/admin/add_member", post(admin::add_member))
        .route("/admin/add_season", post(admin::add_season))
        .route("/admin/add_class", post(admin::add_class))
        .route("/admin/add_note", post(admin::add_note))
        .route("/admin/add_post", post(admin::add_post))
        .route("/admin/add_exam", post(admin::add_exam))
        .route(
            "/admin/exam-center",
            get(admin::exam_center_page).post(admin::exam_center_submit),
        )
}
