//! # campus-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for every repository trait
//! defined in `campus-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations and the database readiness probe
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campus_db::{create_pool, DatabaseConfig, PgSeasonRepository};
//! use campus_core::traits::SeasonRepository;
//!
//! async fn example(config: &campus_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(config)).await?;
//!     let seasons = PgSeasonRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgClassRepository, PgExamRepository, PgHealthCheck, PgMemberRepository, PgNoteRepository,
    PgPostRepository, PgSeasonRepository, PgUserRepository,
};
