//! Value objects - immutable domain primitives and pure transformations

mod embed_link;
mod photo_name;
mod quiz;
mod season_id;

pub use embed_link::to_embed_link;
pub use photo_name::member_photo_file_name;
pub use quiz::{decode_questions, FormFields, Question, QuizDraft, OPTIONS_PER_QUESTION};
pub use season_id::{SeasonId, DEFAULT_SEASON};
