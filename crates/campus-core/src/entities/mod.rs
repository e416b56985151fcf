//! Domain entities - one per stored collection

mod class;
mod exam;
mod member;
mod note;
mod post;
mod season;
mod user;

pub use class::{Class, NewClass};
pub use exam::{Exam, NewExam};
pub use member::{Member, NewMember};
pub use note::{NewNote, Note};
pub use post::{NewPost, Post};
pub use season::{NewSeason, Season};
pub use user::{NewUser, User};
