//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub web: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub admin: AdminConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply bundled migrations at startup
    #[serde(default)]
    pub run_migrations: bool,
}

/// Redis configuration (session storage)
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// The single privileged account, defined by configuration rather than data
#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Idle lifetime of a stored session record, refreshed on every save
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: u64,
}

/// Static files and uploads
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u32,
}

impl StorageConfig {
    /// Directory uploaded member photos are written to
    #[must_use]
    pub fn member_upload_dir(&self) -> PathBuf {
        self.static_dir.join(Path::new(MEMBER_UPLOAD_SUBDIR))
    }

    /// Public URL of a stored member photo
    #[must_use]
    pub fn member_photo_url(&self, file_name: &str) -> String {
        format!("{STATIC_URL_PREFIX}/{MEMBER_UPLOAD_SUBDIR}/{file_name}")
    }

    /// Request body limit in bytes
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

/// URL prefix the static directory is served under
pub const STATIC_URL_PREFIX: &str = "/static";

const MEMBER_UPLOAD_SUBDIR: &str = "uploads/members";

// Default value functions
fn default_app_name() -> String {
    "campus".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_cookie_name() -> String {
    "campus_session".to_string()
}

fn default_session_ttl() -> u64 {
    2_592_000 // 30 days
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_max_file_size() -> u32 {
    10
}

/// Read a required variable
fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn required_parsed<T: FromStr>(name: &'static str) -> Result<T, ConfigError> {
    let raw = required(name)?;
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name, raw))
}

/// Read an optional variable, rejecting values that do not parse
fn optional<T: FromStr>(name: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default()),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            web: ServerConfig {
                host: env::var("WEB_HOST").unwrap_or_else(|_| default_host()),
                port: required_parsed("WEB_PORT")?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: optional("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: optional("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                run_migrations: optional("DATABASE_RUN_MIGRATIONS", || false)?,
            },
            redis: RedisConfig {
                url: required("REDIS_URL")?,
                max_connections: optional("REDIS_MAX_CONNECTIONS", default_redis_max_connections)?,
            },
            admin: AdminConfig {
                username: required("ADMIN_USERNAME")?,
                password: required("ADMIN_PASSWORD")?,
            },
            session: SessionConfig {
                cookie_name: env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| default_cookie_name()),
                ttl_seconds: optional("SESSION_TTL_SECONDS", default_session_ttl)?,
            },
            storage: StorageConfig {
                static_dir: env::var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_static_dir()),
                max_file_size_mb: optional("MAX_FILE_SIZE_MB", default_max_file_size)?,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
