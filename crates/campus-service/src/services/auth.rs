//! Authentication service
//!
//! Handles login for the admin account and students, and student registration.

use campus_common::auth::{hash_password, verify_password};
use campus_core::entities::{NewUser, User};
use campus_core::session::{Flash, FlashLevel};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{LoginForm, RegisterForm};
use crate::dto::requests::present;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notice for a taken username
pub const USERNAME_TAKEN: &str = "Username already exists. Please choose another.";

/// Result of a login attempt
///
/// Failures are outcomes, not errors: the page is re-rendered with a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Admin credential pair matched
    Admin { username: String },
    /// Approved student
    Student { username: String },
    /// Password matched but the account is not an approved student
    NotApproved,
    /// Unknown user or wrong password
    InvalidCredentials,
}

impl LoginOutcome {
    /// Name to store in the session, if the login succeeded
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Admin { username } | Self::Student { username } => Some(username),
            Self::NotApproved | Self::InvalidCredentials => None,
        }
    }

    /// Page to send the visitor to after a successful login
    pub fn redirect_to(&self) -> Option<&'static str> {
        match self {
            Self::Admin { .. } => Some("/admin"),
            Self::Student { .. } => Some("/"),
            Self::NotApproved | Self::InvalidCredentials => None,
        }
    }

    pub fn flash(&self) -> Flash {
        match self {
            Self::Admin { .. } => Flash::new(FlashLevel::Success, "Admin logged in successfully."),
            Self::Student { .. } => Flash::new(FlashLevel::Success, "Logged in successfully."),
            Self::NotApproved => Flash::new(
                FlashLevel::Warning,
                "Your account is not approved by admin yet.",
            ),
            Self::InvalidCredentials => {
                Flash::new(FlashLevel::Danger, "Invalid username or password.")
            }
        }
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check a username/password pair
    ///
    /// The admin pair is compared first and wins over any stored user with
    /// the same name.
    #[instrument(skip(self, form), fields(username = form.username.as_deref().unwrap_or_default()))]
    pub async fn login(&self, form: LoginForm) -> ServiceResult<LoginOutcome> {
        let username = form.username.unwrap_or_default();
        let password = form.password.unwrap_or_default();
        let admin = self.ctx.admin();

        if username == admin.username && password == admin.password {
            info!("Admin logged in");
            return Ok(LoginOutcome::Admin { username });
        }

        let Some(user) = self.ctx.user_repo().find_by_username(&username).await? else {
            warn!("Login failed: unknown user");
            return Ok(LoginOutcome::InvalidCredentials);
        };

        if !verify_password(&password, &user.password_hash) {
            warn!("Login failed: wrong password");
            return Ok(LoginOutcome::InvalidCredentials);
        }

        if !user.can_login() {
            warn!(student = user.student, approved = user.approved, "Login refused: not approved");
            return Ok(LoginOutcome::NotApproved);
        }

        info!(user_id = user.id, "Student logged in");
        Ok(LoginOutcome::Student {
            username: user.username,
        })
    }

    /// Register a new, unapproved account
    ///
    /// The existence check and the insert are not atomic; two simultaneous
    /// registrations of one name can both succeed.
    #[instrument(skip(self, form), fields(username = form.username.as_deref().unwrap_or_default()))]
    pub async fn register(&self, form: RegisterForm) -> ServiceResult<User> {
        let (Some(username), Some(password), Some(email)) = (
            present(form.username.as_ref()),
            form.password.as_deref().filter(|p| !p.is_empty()),
            present(form.email.as_ref()),
        ) else {
            return Err(ServiceError::validation(
                "Username, password, and email are required.",
            ));
        };

        let form = RegisterForm {
            email: Some(email.to_string()),
            ..form.clone()
        };
        if let Err(errors) = form.validate() {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "Invalid registration details.".to_string());
            return Err(ServiceError::Validation(message));
        }

        // The admin name is reserved so a student can never share its session identity
        if username == self.ctx.admin().username
            || self.ctx.user_repo().username_exists(username).await?
        {
            warn!("Registration refused: username taken");
            return Err(ServiceError::validation(USERNAME_TAKEN));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .ctx
            .user_repo()
            .insert(&NewUser::pending(
                username.to_string(),
                password_hash,
                email.to_string(),
            ))
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }
}
