//! # campus-cache
//!
//! Redis layer holding server-side session records.
//!
//! ## Example
//!
//! ```ignore
//! use campus_cache::{RedisPool, RedisSessionStore};
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let sessions = RedisSessionStore::new(pool);
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::{RedisSessionStore, SESSION_KEY_PREFIX};
