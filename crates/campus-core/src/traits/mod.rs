//! Ports implemented by the infrastructure crates

mod repositories;

pub use repositories::{
    ClassRepository, ExamRepository, HealthCheck, MemberRepository, NoteRepository,
    PostRepository, RepoResult, SeasonRepository, UserRepository,
};
