//! Test helpers for integration tests
//!
//! Spawns the real router on an ephemeral port, backed by in-memory stores
//! and a temporary static directory, and drives it like a browser: cookies
//! are kept, redirects are not followed.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use campus_common::auth::hash_password;
use campus_common::{
    AdminConfig, AppConfig, AppSettings, DatabaseConfig, Environment, RedisConfig, ServerConfig,
    SessionConfig, StorageConfig,
};
use campus_core::entities::{NewUser, User};
use campus_core::traits::HealthCheck;
use campus_service::{PhotoStorage, ServiceContextBuilder};
use campus_web::session::SessionBackend;
use campus_web::views::Views;
use campus_web::{create_app, AppState};
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use serde::Serialize;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::memory::MemoryStore;

pub const ADMIN_USERNAME: &str = "hasan";
pub const ADMIN_PASSWORD: &str = "anam";

/// Configuration pointing at a throwaway static directory
///
/// Database and Redis URLs are never dialled; the stores are in memory.
pub fn test_config(static_dir: &Path) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "campus-test".to_string(),
            env: Environment::Development,
        },
        web: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        redis: RedisConfig {
            url: "redis://unused".to_string(),
            max_connections: 1,
        },
        admin: AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
        session: SessionConfig {
            cookie_name: "campus_session".to_string(),
            ttl_seconds: 3600,
        },
        storage: StorageConfig {
            static_dir: static_dir.to_path_buf(),
            max_file_size_mb: 2,
        },
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub static_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_health_checks(Vec::new()).await
    }

    /// Start a test server with extra readiness probes
    pub async fn start_with_health_checks(extra: Vec<Arc<dyn HealthCheck>>) -> Result<Self> {
        let static_dir = tempfile::tempdir()?;
        let config = test_config(static_dir.path());
        let store = Arc::new(MemoryStore::new());

        let mut builder = ServiceContextBuilder::new()
            .season_repo(store.clone())
            .class_repo(store.clone())
            .note_repo(store.clone())
            .exam_repo(store.clone())
            .post_repo(store.clone())
            .member_repo(store.clone())
            .user_repo(store.clone())
            .health_check(store.clone())
            .admin(config.admin.clone())
            .photo_storage(PhotoStorage::new(config.storage.clone()));
        for check in extra {
            builder = builder.health_check(check);
        }
        let service_context = builder.build()?;

        let sessions = SessionBackend::new(store.sessions.clone());
        let state = AppState::new(service_context, config, Views::new()?, sessions);
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            client: browser()?,
            store,
            static_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Submit a url-encoded form
    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).form(form).send().await?)
    }

    /// Submit a multipart form
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Response> {
        self.post_form("/login", &[("username", username), ("password", password)])
            .await
    }

    pub async fn login_admin(&self) -> Result<Response> {
        let response = self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await?;
        anyhow::ensure!(
            location(&response).as_deref() == Some("/admin"),
            "admin login did not redirect to the panel"
        );
        Ok(response)
    }

    /// Insert a user directly, bypassing registration
    pub fn seed_user(&self, username: &str, password: &str, approved: bool) -> Result<User> {
        let user = NewUser {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            email: format!("{username}@example.com"),
            student: true,
            approved,
            courses_access: Vec::new(),
        };
        Ok(self.store.insert_user(&user))
    }

    /// Follow a redirect by hand and return the page body
    pub async fn follow(&self, response: Response) -> Result<String> {
        let to = location(&response)
            .ok_or_else(|| anyhow::anyhow!("expected a redirect, got {}", response.status()))?;
        let page = self.get(&to).await?;
        Ok(page.text().await?)
    }
}

/// A cookie-keeping client that does not follow redirects
pub fn browser() -> Result<Client> {
    Ok(Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?)
}

/// Value of the session cookie a response sets, if any
pub fn session_cookie(response: &Response, name: &str) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// `Location` header of a redirect
pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Assert a redirect to `to`
pub fn assert_redirect(response: &Response, to: &str) {
    assert!(
        response.status().is_redirection(),
        "expected redirect to {to}, got {}",
        response.status()
    );
    assert_eq!(location(response).as_deref(), Some(to));
}

/// Assert response status and return the body
pub async fn assert_page(response: Response, expected: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    anyhow::ensure!(
        status == expected,
        "Expected status {expected}, got {status}. Body: {body}"
    );
    Ok(body)
}
