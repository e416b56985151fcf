//! Session storage module.

mod web_session;

pub use web_session::{RedisSessionStore, SESSION_KEY_PREFIX};
