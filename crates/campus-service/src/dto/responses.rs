//! Page data handed to the view layer

use serde::Serialize;

use campus_core::entities::{Class, Exam, Member, Note, Post, Season};
use campus_core::value_objects::SeasonId;

/// Home page: season picker and the selected season's announcements
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub seasons: Vec<Season>,
    pub selected_season: SeasonId,
    pub posts: Vec<Post>,
}

/// A class with its video link in embeddable form
#[derive(Debug, Clone, Serialize)]
pub struct ClassView {
    #[serde(flatten)]
    pub class: Class,
    pub embed_link: Option<String>,
}

impl From<Class> for ClassView {
    fn from(class: Class) -> Self {
        let embed_link = class.embed_link();
        Self { class, embed_link }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassPage {
    pub season_id: SeasonId,
    pub classes: Vec<ClassView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotePage {
    pub season_id: SeasonId,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamPage {
    pub season_id: SeasonId,
    pub exams: Vec<Exam>,
}

/// Everything the admin panel lists
#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub seasons: Vec<Season>,
    pub members: Vec<Member>,
    pub classes: Vec<Class>,
    pub notes: Vec<Note>,
    pub posts: Vec<Post>,
    pub exams: Vec<Exam>,
}
