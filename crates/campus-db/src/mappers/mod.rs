//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read back from PostgreSQL.
//! Inserts bind the `New*` values directly.

mod content;
mod member;
mod user;
