//! Database models - SQLx-compatible structs for PostgreSQL tables

mod content;
mod member;
mod user;

pub use content::{ClassModel, ExamModel, NoteModel, PostModel, SeasonModel};
pub use member::MemberModel;
pub use user::UserModel;
