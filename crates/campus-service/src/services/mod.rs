//! Business logic services
//!
//! Access rules, page data, and the create actions behind the admin panel.

pub mod access;
pub mod admin;
pub mod auth;
pub mod content;
pub mod context;
pub mod error;
pub mod exam_center;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use access::{require_admin, require_login, AccessDecision, DenialReason, Identity, RequestContext};
pub use admin::AdminService;
pub use auth::{AuthService, LoginOutcome, USERNAME_TAKEN};
pub use content::{select_season, ContentService, SeasonSelection};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use exam_center::ExamCenterService;
pub use storage::PhotoStorage;
