//! Repository traits (ports) - define the interface for data access
//!
//! One repository per stored collection. The collections are create-only:
//! nothing here updates or deletes.

use async_trait::async_trait;

use crate::entities::{
    Class, Exam, Member, NewClass, NewExam, NewMember, NewNote, NewPost, NewSeason, NewUser, Note,
    Post, Season, User,
};
use crate::error::DomainError;
use crate::value_objects::SeasonId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Season Repository
// ============================================================================

#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// List every season
    async fn find_all(&self) -> RepoResult<Vec<Season>>;

    /// Insert a season
    async fn insert(&self, season: &NewSeason) -> RepoResult<Season>;
}

// ============================================================================
// Season-scoped content repositories
// ============================================================================

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Class>>;

    /// List classes of one season
    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Class>>;

    async fn insert(&self, class: &NewClass) -> RepoResult<Class>;
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Note>>;

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Note>>;

    async fn insert(&self, note: &NewNote) -> RepoResult<Note>;
}

#[async_trait]
pub trait ExamRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Exam>>;

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Exam>>;

    async fn insert(&self, exam: &NewExam) -> RepoResult<Exam>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Post>>;

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Post>>;

    async fn insert(&self, post: &NewPost) -> RepoResult<Post>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    async fn insert(&self, member: &NewMember) -> RepoResult<Member>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already registered
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Insert a user
    ///
    /// Does not enforce username uniqueness; callers check first.
    async fn insert(&self, user: &NewUser) -> RepoResult<User>;
}

// ============================================================================
// Health
// ============================================================================

/// A backing service that can report whether it is reachable
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short name used in readiness reports
    fn name(&self) -> &'static str;

    async fn check(&self) -> RepoResult<()>;
}
