//! Data transfer objects
//!
//! - Request shapes for every form the site accepts
//! - Page data handed to the view layer

pub mod requests;
pub mod responses;

pub use requests::{
    ClassForm, ExamForm, LoginForm, MemberForm, NoteForm, PhotoUpload, PostForm, RegisterForm,
    SeasonForm, SeasonQuery,
};
pub use responses::{AdminOverview, ClassPage, ClassView, ExamPage, HomePage, NotePage};
