//! Season and content model -> entity mappers

use campus_core::entities::{Class, Exam, Note, Post, Season};
use campus_core::value_objects::SeasonId;

use crate::models::{ClassModel, ExamModel, NoteModel, PostModel, SeasonModel};

impl From<SeasonModel> for Season {
    fn from(model: SeasonModel) -> Self {
        Season {
            id: model.id,
            season_id: SeasonId::new(model.season_id),
            title: model.title,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<ClassModel> for Class {
    fn from(model: ClassModel) -> Self {
        Class {
            id: model.id,
            season_id: SeasonId::new(model.season_id),
            class_name: model.class_name,
            description: model.description,
            link: model.link,
            created_at: model.created_at,
        }
    }
}

impl From<NoteModel> for Note {
    fn from(model: NoteModel) -> Self {
        Note {
            id: model.id,
            season_id: SeasonId::new(model.season_id),
            title: model.title,
            drive_link: model.drive_link,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<ExamModel> for Exam {
    fn from(model: ExamModel) -> Self {
        Exam {
            id: model.id,
            season_id: SeasonId::new(model.season_id),
            title: model.title,
            link: model.link,
            created_at: model.created_at,
        }
    }
}

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            season_id: SeasonId::new(model.season_id),
            title: model.title,
            enroll_link: model.enroll_link,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}
