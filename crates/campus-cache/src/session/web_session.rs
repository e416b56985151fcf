//! Browser session records in Redis.
//!
//! One JSON document per session id, expiring when the record's own expiry
//! date passes. The session layer moves that date forward on every save.

use async_trait::async_trait;
use time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};

use campus_core::error::DomainError;
use campus_core::traits::{HealthCheck, RepoResult};

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for session records
pub const SESSION_KEY_PREFIX: &str = "session:";

fn map_store_error(e: RedisPoolError) -> session_store::Error {
    match e {
        RedisPoolError::Serialization(e) => session_store::Error::Encode(e.to_string()),
        other => session_store::Error::Backend(other.to_string()),
    }
}

/// Seconds until `expiry_date`, never less than one
fn ttl_seconds(expiry_date: OffsetDateTime) -> u64 {
    let remaining = (expiry_date - OffsetDateTime::now_utc()).whole_seconds();
    u64::try_from(remaining).unwrap_or(0).max(1)
}

/// Redis-backed session store
#[derive(Clone, Debug)]
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn key(id: &Id) -> String {
        format!("{SESSION_KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        // Ids are random; on the rare collision draw another one
        loop {
            let stored = self
                .pool
                .set_new_with_ttl(&Self::key(&record.id), &*record, ttl_seconds(record.expiry_date))
                .await
                .map_err(map_store_error)?;
            if stored {
                tracing::debug!("Created session record");
                return Ok(());
            }
            record.id = Id::default();
        }
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.pool
            .set_with_ttl(&Self::key(&record.id), record, ttl_seconds(record.expiry_date))
            .await
            .map_err(map_store_error)
    }

    async fn load(&self, id: &Id) -> session_store::Result<Option<Record>> {
        match self.pool.get_value::<Record>(&Self::key(id)).await {
            Ok(record) => Ok(record),
            // A record we can no longer read is treated as absent
            Err(RedisPoolError::Serialization(e)) => {
                tracing::warn!(error = %e, "Discarding unreadable session record");
                Ok(None)
            }
            Err(e) => Err(map_store_error(e)),
        }
    }

    async fn delete(&self, id: &Id) -> session_store::Result<()> {
        self.pool
            .delete(&Self::key(id))
            .await
            .map_err(map_store_error)
    }
}

#[async_trait]
impl HealthCheck for RedisSessionStore {
    fn name(&self) -> &'static str {
        "session_store"
    }

    async fn check(&self) -> RepoResult<()> {
        self.pool
            .health_check()
            .await
            .map_err(|e| DomainError::SessionStoreError(e.to_string()))
    }
}
