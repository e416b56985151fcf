//! Server-side sessions
//!
//! `tower-sessions` owns the cookie and the record lifecycle. Each record holds
//! one typed [`SessionData`] value under [`SESSION_DATA_KEY`]; the
//! [`Session`] extractor reads and writes that value for handlers. A record
//! only reaches the store, and the browser a cookie, once it is first changed.

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use campus_common::{AdminConfig, AppConfig, SessionConfig};
use campus_core::session::{Flash, FlashLevel, SessionData};
use campus_service::RequestContext;
use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::response::{WebError, WebResult};

/// Record key holding the typed session payload
pub const SESSION_DATA_KEY: &str = "campus";

/// Browsers cap cookie lifetimes at 400 days
const MAX_SESSION_TTL: Duration = Duration::days(400);

/// Type-erased session store shared by the session layer
#[derive(Clone, Debug)]
pub struct SessionBackend(Arc<dyn SessionStore>);

impl SessionBackend {
    pub fn new(store: impl SessionStore) -> Self {
        Self(Arc::new(store))
    }
}

#[async_trait]
impl SessionStore for SessionBackend {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        self.0.create(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.0.save(record).await
    }

    async fn load(&self, id: &Id) -> session_store::Result<Option<Record>> {
        self.0.load(id).await
    }

    async fn delete(&self, id: &Id) -> session_store::Result<()> {
        self.0.delete(id).await
    }
}

/// Idle lifetime of a session, bounded to what browsers accept
fn session_ttl(config: &SessionConfig) -> Duration {
    i64::try_from(config.ttl_seconds)
        .map(Duration::seconds)
        .unwrap_or(MAX_SESSION_TTL)
        .min(MAX_SESSION_TTL)
}

/// Session layer for the site routes
pub fn session_layer(
    backend: SessionBackend,
    config: &AppConfig,
) -> SessionManagerLayer<SessionBackend> {
    SessionManagerLayer::new(backend)
        .with_name(config.session.cookie_name.clone())
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.app.env.is_production())
        .with_expiry(Expiry::OnInactivity(session_ttl(&config.session)))
}

/// Handle to the current request's session payload
#[derive(Debug, Clone)]
pub struct Session {
    inner: tower_sessions::Session,
}

impl Session {
    /// Snapshot of the payload as it is now
    pub async fn data(&self) -> WebResult<SessionData> {
        Ok(self
            .inner
            .get::<SessionData>(SESSION_DATA_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Mutate the payload; it is written back only if `f` changed it
    pub async fn update<R>(&self, f: impl FnOnce(&mut SessionData) -> R) -> WebResult<R> {
        let before = self.data().await?;
        let mut data = before.clone();
        let out = f(&mut data);

        if data != before {
            self.inner.insert(SESSION_DATA_KEY, data).await?;
        }
        Ok(out)
    }

    pub async fn flash(&self, level: FlashLevel, message: impl Into<String>) -> WebResult<()> {
        self.update(|data| data.push_flash(level, message)).await
    }

    pub async fn push(&self, flash: Flash) -> WebResult<()> {
        self.update(|data| data.flashes.push(flash)).await
    }

    pub async fn take_flashes(&self) -> WebResult<Vec<Flash>> {
        self.update(SessionData::take_flashes).await
    }

    /// Immutable identity/season view for guards and services
    pub async fn request_context(&self, admin: &AdminConfig) -> WebResult<RequestContext> {
        let data = self.data().await?;
        Ok(RequestContext::from_session(&data, admin))
    }

    /// Move the payload to a fresh session id and drop the old record
    pub async fn cycle_id(&self) -> WebResult<()> {
        self.inner.cycle_id().await?;
        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<tower_sessions::Session>()
            .cloned()
            .map(|inner| Session { inner })
            .ok_or(WebError::SessionMissing)
    }
}
