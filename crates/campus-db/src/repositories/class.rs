//! PostgreSQL implementation of ClassRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Class, NewClass};
use campus_core::traits::{ClassRepository, RepoResult};
use campus_core::value_objects::SeasonId;

use crate::models::ClassModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ClassRepository
#[derive(Clone)]
pub struct PgClassRepository {
    pool: PgPool,
}

impl PgClassRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PgClassRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Class>> {
        let rows = sqlx::query_as::<_, ClassModel>(
            r"
            SELECT id, season_id, class_name, description, link, created_at
            FROM classes
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Class>> {
        let rows = sqlx::query_as::<_, ClassModel>(
            r"
            SELECT id, season_id, class_name, description, link, created_at
            FROM classes
            WHERE season_id = $1
            ORDER BY id
            ",
        )
        .bind(season_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Class::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, class: &NewClass) -> RepoResult<Class> {
        let row = sqlx::query_as::<_, ClassModel>(
            r"
            INSERT INTO classes (season_id, class_name, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, season_id, class_name, description, link, created_at
            ",
        )
        .bind(class.season_id.into_inner())
        .bind(&class.class_name)
        .bind(&class.description)
        .bind(&class.link)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Class::from(row))
    }
}
