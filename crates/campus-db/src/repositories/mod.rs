//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in campus-core.
//! Every listing is returned in insertion order.

mod class;
mod error;
mod exam;
mod health;
mod member;
mod note;
mod post;
mod season;
mod user;

pub use class::PgClassRepository;
pub use exam::PgExamRepository;
pub use health::PgHealthCheck;
pub use member::PgMemberRepository;
pub use note::PgNoteRepository;
pub use post::PgPostRepository;
pub use season::PgSeasonRepository;
pub use user::PgUserRepository;
