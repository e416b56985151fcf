//! PostgreSQL implementation of NoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{NewNote, Note};
use campus_core::traits::{NoteRepository, RepoResult};
use campus_core::value_objects::SeasonId;

use crate::models::NoteModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NoteRepository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteModel>(
            r"
            SELECT id, season_id, title, drive_link, description, created_at
            FROM notes
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteModel>(
            r"
            SELECT id, season_id, title, drive_link, description, created_at
            FROM notes
            WHERE season_id = $1
            ORDER BY id
            ",
        )
        .bind(season_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, note: &NewNote) -> RepoResult<Note> {
        let row = sqlx::query_as::<_, NoteModel>(
            r"
            INSERT INTO notes (season_id, title, drive_link, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, season_id, title, drive_link, description, created_at
            ",
        )
        .bind(note.season_id.into_inner())
        .bind(&note.title)
        .bind(&note.drive_link)
        .bind(&note.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Note::from(row))
    }
}
