//! Request context and access guards
//!
//! A `RequestContext` is built once per request from the session record. It
//! is immutable; handlers that change the session do so through the session
//! itself and the next request sees the result.

use campus_common::AdminConfig;
use campus_core::session::{Flash, FlashLevel, SessionData};
use campus_core::value_objects::SeasonId;

/// Who is making the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    /// A signed-in student
    User(String),
    /// The configured admin account
    Admin(String),
}

impl Identity {
    /// Classify a session user name
    ///
    /// Admin status is decided by name equality with the configured admin
    /// account, never by data.
    pub fn from_session_user(user: Option<&str>, admin: &AdminConfig) -> Self {
        match user {
            None => Self::Anonymous,
            Some(name) if name == admin.username => Self::Admin(name.to_string()),
            Some(name) => Self::User(name.to_string()),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::User(name) | Self::Admin(name) => Some(name),
        }
    }
}

/// Immutable per-request view of identity and season selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    identity: Identity,
    selected_season: Option<SeasonId>,
}

impl RequestContext {
    pub fn new(identity: Identity, selected_season: Option<SeasonId>) -> Self {
        Self {
            identity,
            selected_season,
        }
    }

    pub fn from_session(session: &SessionData, admin: &AdminConfig) -> Self {
        Self::new(
            Identity::from_session_user(session.user.as_deref(), admin),
            session.selected_season,
        )
    }

    pub fn anonymous() -> Self {
        Self::new(Identity::Anonymous, None)
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.username()
    }

    pub fn is_logged_in(&self) -> bool {
        !matches!(self.identity, Identity::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.identity, Identity::Admin(_))
    }

    /// Season remembered from an earlier request
    pub fn selected_season(&self) -> Option<SeasonId> {
        self.selected_season
    }
}

/// Why a guard refused a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    LoginRequired,
    AdminRequired,
}

impl DenialReason {
    /// Notice shown on the login page
    pub fn flash(self) -> Flash {
        match self {
            Self::LoginRequired => Flash::new(
                FlashLevel::Warning,
                "Please log in first to access this page.",
            ),
            Self::AdminRequired => Flash::new(FlashLevel::Danger, "Admin access required."),
        }
    }

    /// Both denials send the visitor to the login page
    pub fn redirect_to(self) -> &'static str {
        "/login"
    }
}

/// Outcome of an access guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Any signed-in identity passes
pub fn require_login(ctx: &RequestContext) -> AccessDecision {
    if ctx.is_logged_in() {
        AccessDecision::Allowed
    } else {
        AccessDecision::Denied(DenialReason::LoginRequired)
    }
}

/// Only the configured admin passes; a signed-in student is denied the same way
/// an anonymous visitor is
pub fn require_admin(ctx: &RequestContext) -> AccessDecision {
    if ctx.is_admin() {
        AccessDecision::Allowed
    } else {
        AccessDecision::Denied(DenialReason::AdminRequired)
    }
}
