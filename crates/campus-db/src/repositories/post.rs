//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{NewPost, Post};
use campus_core::traits::{PostRepository, RepoResult};
use campus_core::value_objects::SeasonId;

use crate::models::PostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, season_id, title, enroll_link, image_url, created_at
            FROM posts
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, season_id, title, enroll_link, image_url, created_at
            FROM posts
            WHERE season_id = $1
            ORDER BY id
            ",
        )
        .bind(season_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, post: &NewPost) -> RepoResult<Post> {
        let row = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (season_id, title, enroll_link, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, season_id, title, enroll_link, image_url, created_at
            ",
        )
        .bind(post.season_id.into_inner())
        .bind(&post.title)
        .bind(&post.enroll_link)
        .bind(&post.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(row))
    }
}
