//! Service context - dependency container for services
//!
//! Holds the repositories, the readiness probes, the admin credential pair,
//! and the photo storage.

use std::sync::Arc;

use campus_common::AdminConfig;
use campus_core::traits::{
    ClassRepository, ExamRepository, HealthCheck, MemberRepository, NoteRepository,
    PostRepository, SeasonRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};
use super::storage::PhotoStorage;

/// Service context containing all dependencies
///
/// Every backing store sits behind a trait object, so the web layer can be
/// driven against PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    season_repo: Arc<dyn SeasonRepository>,
    class_repo: Arc<dyn ClassRepository>,
    note_repo: Arc<dyn NoteRepository>,
    exam_repo: Arc<dyn ExamRepository>,
    post_repo: Arc<dyn PostRepository>,
    member_repo: Arc<dyn MemberRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Readiness probes
    health_checks: Vec<Arc<dyn HealthCheck>>,

    admin: AdminConfig,
    photo_storage: PhotoStorage,
}

impl ServiceContext {
    // === Repositories ===

    pub fn season_repo(&self) -> &dyn SeasonRepository {
        self.season_repo.as_ref()
    }

    pub fn class_repo(&self) -> &dyn ClassRepository {
        self.class_repo.as_ref()
    }

    pub fn note_repo(&self) -> &dyn NoteRepository {
        self.note_repo.as_ref()
    }

    pub fn exam_repo(&self) -> &dyn ExamRepository {
        self.exam_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Everything else ===

    pub fn health_checks(&self) -> &[Arc<dyn HealthCheck>] {
        &self.health_checks
    }

    /// The configured admin credential pair
    pub fn admin(&self) -> &AdminConfig {
        &self.admin
    }

    pub fn photo_storage(&self) -> &PhotoStorage {
        &self.photo_storage
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("health_checks", &self.health_checks.len())
            .field("admin", &self.admin)
            .field("photo_storage", &self.photo_storage)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    season_repo: Option<Arc<dyn SeasonRepository>>,
    class_repo: Option<Arc<dyn ClassRepository>>,
    note_repo: Option<Arc<dyn NoteRepository>>,
    exam_repo: Option<Arc<dyn ExamRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    health_checks: Vec<Arc<dyn HealthCheck>>,
    admin: Option<AdminConfig>,
    photo_storage: Option<PhotoStorage>,
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn season_repo(mut self, repo: Arc<dyn SeasonRepository>) -> Self {
        self.season_repo = Some(repo);
        self
    }

    pub fn class_repo(mut self, repo: Arc<dyn ClassRepository>) -> Self {
        self.class_repo = Some(repo);
        self
    }

    pub fn note_repo(mut self, repo: Arc<dyn NoteRepository>) -> Self {
        self.note_repo = Some(repo);
        self
    }

    pub fn exam_repo(mut self, repo: Arc<dyn ExamRepository>) -> Self {
        self.exam_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Add a readiness probe
    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }

    pub fn admin(mut self, admin: AdminConfig) -> Self {
        self.admin = Some(admin);
        self
    }

    pub fn photo_storage(mut self, storage: PhotoStorage) -> Self {
        self.photo_storage = Some(storage);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            season_repo: required(self.season_repo, "season_repo")?,
            class_repo: required(self.class_repo, "class_repo")?,
            note_repo: required(self.note_repo, "note_repo")?,
            exam_repo: required(self.exam_repo, "exam_repo")?,
            post_repo: required(self.post_repo, "post_repo")?,
            member_repo: required(self.member_repo, "member_repo")?,
            user_repo: required(self.user_repo, "user_repo")?,
            health_checks: self.health_checks,
            admin: required(self.admin, "admin")?,
            photo_storage: required(self.photo_storage, "photo_storage")?,
        })
    }
}
