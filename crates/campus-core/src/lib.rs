//! # campus-core
//!
//! Domain layer containing entities, value objects, session types, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod session;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Class, Exam, Member, NewClass, NewExam, NewMember, NewNote, NewPost, NewSeason, NewUser, Note,
    Post, Season, User,
};
pub use error::DomainError;
pub use session::{Flash, FlashLevel, SessionData};
pub use traits::{
    ClassRepository, ExamRepository, HealthCheck, MemberRepository, NoteRepository,
    PostRepository, RepoResult, SeasonRepository, UserRepository,
};
pub use value_objects::{
    decode_questions, member_photo_file_name, to_embed_link, FormFields, Question, QuizDraft,
    SeasonId, DEFAULT_SEASON,
};
