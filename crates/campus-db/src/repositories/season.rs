//! PostgreSQL implementation of SeasonRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{NewSeason, Season};
use campus_core::traits::{RepoResult, SeasonRepository};

use crate::models::SeasonModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SeasonRepository
#[derive(Clone)]
pub struct PgSeasonRepository {
    pool: PgPool,
}

impl PgSeasonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeasonRepository for PgSeasonRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Season>> {
        let rows = sqlx::query_as::<_, SeasonModel>(
            r"
            SELECT id, season_id, title, description, created_at
            FROM seasons
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Season::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, season: &NewSeason) -> RepoResult<Season> {
        let row = sqlx::query_as::<_, SeasonModel>(
            r"
            INSERT INTO seasons (season_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, season_id, title, description, created_at
            ",
        )
        .bind(season.season_id.into_inner())
        .bind(&season.title)
        .bind(&season.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Season::from(row))
    }
}
