//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Member, NewMember};
use campus_core::traits::{MemberRepository, RepoResult};

use crate::models::MemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, role, contact, photo_url, created_at
            FROM members
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, member: &NewMember) -> RepoResult<Member> {
        let row = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (name, role, contact, photo_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, role, contact, photo_url, created_at
            ",
        )
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.contact)
        .bind(&member.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Member::from(row))
    }
}
