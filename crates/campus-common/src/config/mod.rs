//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, RedisConfig,
    ServerConfig, SessionConfig, StorageConfig, STATIC_URL_PREFIX,
};
