//! # campus-service
//!
//! Application layer: per-request access rules, page data assembly, and the
//! admin create actions. Handlers in `campus-web` call into this crate and
//! turn outcomes into flashes, redirects, and rendered pages.

pub mod dto;
pub mod services;

pub use services::{
    require_admin, require_login, select_season, AccessDecision, AdminService, AuthService,
    ContentService, DenialReason, ExamCenterService, Identity, LoginOutcome, PhotoStorage,
    RequestContext, SeasonSelection, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
