//! PostgreSQL implementation of ExamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Exam, NewExam};
use campus_core::traits::{ExamRepository, RepoResult};
use campus_core::value_objects::SeasonId;

use crate::models::ExamModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ExamRepository
#[derive(Clone)]
pub struct PgExamRepository {
    pool: PgPool,
}

impl PgExamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExamRepository for PgExamRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Exam>> {
        let rows = sqlx::query_as::<_, ExamModel>(
            r"
            SELECT id, season_id, title, link, created_at
            FROM exams
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Exam::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Exam>> {
        let rows = sqlx::query_as::<_, ExamModel>(
            r"
            SELECT id, season_id, title, link, created_at
            FROM exams
            WHERE season_id = $1
            ORDER BY id
            ",
        )
        .bind(season_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Exam::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, exam: &NewExam) -> RepoResult<Exam> {
        let row = sqlx::query_as::<_, ExamModel>(
            r"
            INSERT INTO exams (season_id, title, link)
            VALUES ($1, $2, $3)
            RETURNING id, season_id, title, link, created_at
            ",
        )
        .bind(exam.season_id.into_inner())
        .bind(&exam.title)
        .bind(&exam.link)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Exam::from(row))
    }
}
