//! Integration test utilities for the campus site
//!
//! Runs the real router against in-memory stores and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{MemoryStore, Unreachable};
