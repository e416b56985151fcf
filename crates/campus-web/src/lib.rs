//! # campus-web
//!
//! HTML site built with the Axum framework: public and login-gated content
//! pages, the admin panel, server-side sessions, and static files.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod views;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
