//! # campus-common
//!
//! Shared utilities including configuration, error handling, password hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, RedisConfig,
    ServerConfig, SessionConfig, StorageConfig, STATIC_URL_PREFIX,
};
pub use error::AppError;
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
