//! Password hashing for student accounts

mod password;

pub use password::{hash_password, verify_password};
