//! HTML views
//!
//! Templates are compiled into the binary and rendered with minijinja. HTML
//! autoescaping is on for every `.html` template.

use axum::response::Html;
use campus_common::AdminConfig;
use campus_core::session::Flash;
use campus_core::value_objects::SeasonId;
use minijinja::Environment;
use serde::Serialize;

use crate::response::WebResult;
use crate::session::Session;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("class.html", include_str!("../../templates/class.html")),
    ("notes.html", include_str!("../../templates/notes.html")),
    ("exams.html", include_str!("../../templates/exams.html")),
    ("members.html", include_str!("../../templates/members.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("admin.html", include_str!("../../templates/admin.html")),
    (
        "admin_exam_center.html",
        include_str!("../../templates/admin_exam_center.html"),
    ),
    ("404.html", include_str!("../../templates/404.html")),
];

/// Values every page's base layout needs
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub flashes: Vec<Flash>,
    pub username: Option<String>,
    pub is_logged_in: bool,
    pub is_admin: bool,
    pub current_season: Option<SeasonId>,
}

impl Layout {
    /// Build the layout for a page, draining pending notices
    ///
    /// Call last, after the handler has queued its own notices.
    pub async fn from_session(session: &Session, admin: &AdminConfig) -> WebResult<Self> {
        let request = session.request_context(admin).await?;
        Ok(Self {
            flashes: session.take_flashes().await?,
            username: request.username().map(str::to_string),
            is_logged_in: request.is_logged_in(),
            is_admin: request.is_admin(),
            current_season: request.selected_season(),
        })
    }
}

/// Page without data of its own
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

#[derive(Serialize)]
struct PageContext<'a, T: Serialize> {
    #[serde(flatten)]
    layout: &'a Layout,
    #[serde(flatten)]
    page: &'a T,
}

/// Compiled page templates
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render a page inside the base layout
    pub fn render<T: Serialize>(
        &self,
        name: &str,
        layout: &Layout,
        page: &T,
    ) -> WebResult<Html<String>> {
        let template = self.env.get_template(name)?;
        let html = template.render(PageContext { layout, page })?;
        Ok(Html(html))
    }
}

impl std::fmt::Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Views")
            .field("templates", &TEMPLATES.len())
            .finish()
    }
}
