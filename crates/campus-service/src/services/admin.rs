//! Admin service
//!
//! Create actions behind the admin panel. Every field is trimmed before it is
//! stored and a whitespace-only value counts as missing.

use campus_core::entities::{
    Class, Exam, Member, NewClass, NewExam, NewMember, NewNote, NewPost, NewSeason, Note, Post,
    Season,
};
use tracing::{info, instrument};

use crate::dto::requests::{parse_season_id, present};
use crate::dto::{ClassForm, ExamForm, MemberForm, NoteForm, PostForm, SeasonForm};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn owned(value: Option<&String>) -> Option<String> {
    present(value).map(str::to_string)
}

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a season; the season id is checked before the title
    #[instrument(skip(self, form))]
    pub async fn add_season(&self, form: SeasonForm) -> ServiceResult<Season> {
        let season_id = parse_season_id(form.season_id.as_ref())?;
        let title = present(form.title.as_ref())
            .ok_or_else(|| ServiceError::validation("Season Title is required."))?;

        let season = self
            .ctx
            .season_repo()
            .insert(&NewSeason::new(
                season_id,
                title.to_string(),
                owned(form.description.as_ref()),
            ))
            .await?;

        info!(season_id = %season.season_id, "Season added");
        Ok(season)
    }

    #[instrument(skip(self, form))]
    pub async fn add_class(&self, form: ClassForm) -> ServiceResult<Class> {
        let season_id = parse_season_id(form.season_id.as_ref())?;
        let class_name = present(form.class_name.as_ref())
            .ok_or_else(|| ServiceError::validation("Class Name is required."))?;

        let class = self
            .ctx
            .class_repo()
            .insert(&NewClass::new(
                season_id,
                class_name.to_string(),
                owned(form.description.as_ref()),
                form.link.as_deref(),
            ))
            .await?;

        info!(class_id = class.id, season_id = %class.season_id, "Class added");
        Ok(class)
    }

    #[instrument(skip(self, form))]
    pub async fn add_note(&self, form: NoteForm) -> ServiceResult<Note> {
        let season_id = parse_season_id(form.season_id.as_ref())?;
        let (Some(title), Some(drive_link)) =
            (present(form.title.as_ref()), present(form.drive_link.as_ref()))
        else {
            return Err(ServiceError::validation(
                "Note Title and Drive Link are required.",
            ));
        };

        let note = self
            .ctx
            .note_repo()
            .insert(&NewNote::new(
                season_id,
                title.to_string(),
                drive_link.to_string(),
                owned(form.description.as_ref()),
            ))
            .await?;

        info!(note_id = note.id, season_id = %note.season_id, "Note added");
        Ok(note)
    }

    #[instrument(skip(self, form))]
    pub async fn add_post(&self, form: PostForm) -> ServiceResult<Post> {
        let season_id = parse_season_id(form.season_id.as_ref())?;
        let (Some(title), Some(enroll_link), Some(image_url)) = (
            present(form.title.as_ref()),
            present(form.enroll_link.as_ref()),
            present(form.image_url.as_ref()),
        ) else {
            return Err(ServiceError::validation(
                "Post Title, Enroll Link, and Image URL are required.",
            ));
        };

        let post = self
            .ctx
            .post_repo()
            .insert(&NewPost {
                season_id,
                title: title.to_string(),
                enroll_link: enroll_link.to_string(),
                image_url: image_url.to_string(),
            })
            .await?;

        info!(post_id = post.id, season_id = %post.season_id, "Post added");
        Ok(post)
    }

    /// Add an exam link
    ///
    /// Reachable by any signed-in user, not only the admin.
    #[instrument(skip(self, form))]
    pub async fn add_exam(&self, form: ExamForm) -> ServiceResult<Exam> {
        let season_id = parse_season_id(form.season_id.as_ref())?;
        let (Some(title), Some(link)) = (present(form.title.as_ref()), present(form.link.as_ref()))
        else {
            return Err(ServiceError::validation("Exam Title and Link are required."));
        };

        let exam = self
            .ctx
            .exam_repo()
            .insert(&NewExam {
                season_id,
                title: title.to_string(),
                link: link.to_string(),
            })
            .await?;

        info!(exam_id = exam.id, season_id = %exam.season_id, "Exam added");
        Ok(exam)
    }

    /// Add a team member, writing the photo before the record
    #[instrument(skip(self, form))]
    pub async fn add_member(&self, form: MemberForm) -> ServiceResult<Member> {
        let photo = form.photo.as_ref().filter(|p| !p.file_name.trim().is_empty());
        let (Some(name), Some(role), Some(contact), Some(photo)) = (
            present(form.name.as_ref()),
            present(form.role.as_ref()),
            present(form.contact.as_ref()),
            photo,
        ) else {
            return Err(ServiceError::validation(
                "All fields are required for adding a member.",
            ));
        };

        let photo_url = self.ctx.photo_storage().save_member_photo(name, photo).await?;

        let member = self
            .ctx
            .member_repo()
            .insert(&NewMember {
                name: name.to_string(),
                role: role.to_string(),
                contact: contact.to_string(),
                photo_url,
            })
            .await?;

        info!(member_id = member.id, "Member added");
        Ok(member)
    }
}
