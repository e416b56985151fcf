//! Content service
//!
//! Read side of the site: season selection and the data behind each page.

use campus_core::entities::Member;
use campus_core::value_objects::{SeasonId, DEFAULT_SEASON};
use tracing::{debug, instrument, warn};

use crate::dto::{AdminOverview, ClassPage, ClassView, ExamPage, HomePage, NotePage, SeasonQuery};

use super::access::RequestContext;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Season a content page should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSelection {
    pub season: SeasonId,
    /// The `season` query value was present but not an integer
    pub invalid_query: bool,
}

impl SeasonSelection {
    /// Whether the season should be remembered in the session
    #[inline]
    pub fn should_remember(&self) -> bool {
        !self.invalid_query
    }
}

/// Pick the season from the query string, falling back to the session, then
/// the default. An unparsable query shows the default season and is not
/// remembered.
pub fn select_season(query: &SeasonQuery, request: &RequestContext) -> SeasonSelection {
    match SeasonId::resolve(query.season.as_deref(), request.selected_season()) {
        Ok(season) => SeasonSelection {
            season,
            invalid_query: false,
        },
        Err(e) => {
            warn!(error = %e, "Ignoring season query");
            SeasonSelection {
                season: DEFAULT_SEASON,
                invalid_query: true,
            }
        }
    }
}

/// Content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Season list plus the announcements of the selected season
    #[instrument(skip(self))]
    pub async fn home(&self, season: SeasonId) -> ServiceResult<HomePage> {
        let (seasons, posts) = tokio::try_join!(
            self.ctx.season_repo().find_all(),
            self.ctx.post_repo().find_by_season(season),
        )?;

        debug!(seasons = seasons.len(), posts = posts.len(), "Home page loaded");
        Ok(HomePage {
            seasons,
            selected_season: season,
            posts,
        })
    }

    #[instrument(skip(self))]
    pub async fn classes(&self, season: SeasonId) -> ServiceResult<ClassPage> {
        let classes = self.ctx.class_repo().find_by_season(season).await?;
        Ok(ClassPage {
            season_id: season,
            classes: classes.into_iter().map(ClassView::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn notes(&self, season: SeasonId) -> ServiceResult<NotePage> {
        let notes = self.ctx.note_repo().find_by_season(season).await?;
        Ok(NotePage {
            season_id: season,
            notes,
        })
    }

    #[instrument(skip(self))]
    pub async fn exams(&self, season: SeasonId) -> ServiceResult<ExamPage> {
        let exams = self.ctx.exam_repo().find_by_season(season).await?;
        Ok(ExamPage {
            season_id: season,
            exams,
        })
    }

    /// Team members, not season scoped
    pub async fn members(&self) -> ServiceResult<Vec<Member>> {
        Ok(self.ctx.member_repo().find_all().await?)
    }

    /// Everything across all seasons, for the admin panel
    #[instrument(skip(self))]
    pub async fn admin_overview(&self) -> ServiceResult<AdminOverview> {
        let (seasons, members, classes, notes, posts, exams) = tokio::try_join!(
            self.ctx.season_repo().find_all(),
            self.ctx.member_repo().find_all(),
            self.ctx.class_repo().find_all(),
            self.ctx.note_repo().find_all(),
            self.ctx.post_repo().find_all(),
            self.ctx.exam_repo().find_all(),
        )?;

        Ok(AdminOverview {
            seasons,
            members,
            classes,
            notes,
            posts,
            exams,
        })
    }
}
