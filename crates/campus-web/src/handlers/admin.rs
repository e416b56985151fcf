//! Admin panel handlers
//!
//! Everything here is admin-only except `add_exam`, which any signed-in user
//! may call. Create actions always redirect back to the panel.

use axum::{
    extract::{Multipart, State},
    response::Response,
    Form,
};
use campus_core::session::FlashLevel;
use campus_core::value_objects::FormFields;
use campus_service::dto::{
    ClassForm, ExamForm, MemberForm, NoteForm, PhotoUpload, PostForm, SeasonForm,
};
use campus_service::{require_admin, require_login, AdminService, ContentService, ExamCenterService};

use super::{guard, render};
use crate::response::{flash_redirect, rejected, WebError, WebResult};
use crate::session::Session;
use crate::state::AppState;
use crate::views::Empty;

const ADMIN_PANEL: &str = "/admin";
const EXAM_CENTER: &str = "/admin/exam-center";

/// GET /admin
pub async fn panel(State(state): State<AppState>, session: Session) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    let overview = ContentService::new(state.service_context())
        .admin_overview()
        .await?;
    render(&state, &session, "admin.html", &overview).await
}

/// POST /admin/add_season
pub async fn add_season(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SeasonForm>,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    match AdminService::new(state.service_context()).add_season(form).await {
        Ok(season) => flash_redirect(
            &session,
            FlashLevel::Success,
            format!("Season '{}' added successfully.", season.title),
            ADMIN_PANEL,
        )
        .await,
        Err(e) => rejected(&session, e, ADMIN_PANEL).await,
    }
}

/// POST /admin/add_class
pub async fn add_class(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ClassForm>,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    match AdminService::new(state.service_context()).add_class(form).await {
        Ok(class) => flash_redirect(
            &session,
            FlashLevel::Success,
            format!("Class '{}' added successfully.", class.class_name),
            ADMIN_PANEL,
        )
        .await,
        Err(e) => rejected(&session, e, ADMIN_PANEL).await,
    }
}

/// POST /admin/add_note
pub async fn add_note(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NoteForm>,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    match AdminService::new(state.service_context()).add_note(form).await {
        Ok(note) => flash_redirect(
            &session,
            FlashLevel::Success,
            format!("Note '{}' added successfully.", note.title),
            ADMIN_PANEL,
        )
        .await,
        Err(e) => rejected(&session, e, ADMIN_PANEL).await,
    }
}

/// POST /admin/add_post
pub async fn add_post(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PostForm>,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    match AdminService::new(state.service_context()).add_post(form).await {
        Ok(post) => flash_redirect(
            &session,
            FlashLevel::Success,
            format!("Post '{}' added successfully.", post.title),
            ADMIN_PANEL,
        )
        .await,
        Err(e) => rejected(&session, e, ADMIN_PANEL).await,
    }
}

/// POST /admin/add_exam (login only)
pub async fn add_exam(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ExamForm>,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_login).await? {
        return Ok(denied);
    }

    match AdminService::new(state.service_context()).add_exam(form).await {
        Ok(_) => flash_redirect(
            &session,
            FlashLevel::Success,
            "Exam added successfully!",
            ADMIN_PANEL,
        )
        .await,
        Err(e) => rejected(&session, e, ADMIN_PANEL).await,
    }
}

/// POST /admin/add_member (multipart)
pub async fn add_member(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    let form = read_member_form(multipart).await?;
    match AdminService::new(state.service_context()).add_member(form).await {
        Ok(member) => flash_redirect(
            &session,
            FlashLevel::Success,
            format!("Member '{}' added successfully.", member.name),
            ADMIN_PANEL,
        )
        .await,
        Err(e) => rejected(&session, e, ADMIN_PANEL).await,
    }
}

async fn read_member_form(mut multipart: Multipart) -> WebResult<MemberForm> {
    let upload_error = |e: axum::extract::multipart::MultipartError| WebError::Upload(e.body_text());
    let mut form = MemberForm::default();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => form.name = Some(field.text().await.map_err(upload_error)?),
            "role" => form.role = Some(field.text().await.map_err(upload_error)?),
            "contact" => form.contact = Some(field.text().await.map_err(upload_error)?),
            "photo" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(upload_error)?;
                form.photo = Some(PhotoUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

/// GET /admin/exam-center
pub async fn exam_center_page(
    State(state): State<AppState>,
    session: Session,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    render(&state, &session, "admin_exam_center.html", &Empty::default()).await
}

/// POST /admin/exam-center
///
/// The decoded quiz is not stored.
pub async fn exam_center_submit(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    if let Some(denied) = guard(&state, &session, require_admin).await? {
        return Ok(denied);
    }

    match ExamCenterService::new().submit(&FormFields::from_pairs(pairs)) {
        Ok(_) => flash_redirect(
            &session,
            FlashLevel::Success,
            "Exam added successfully!",
            EXAM_CENTER,
        )
        .await,
        Err(e) => rejected(&session, e, EXAM_CENTER).await,
    }
}
