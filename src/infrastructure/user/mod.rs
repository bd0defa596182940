//! User infrastructure module
//!
//! This module provides the Argon2 password hasher and the in-memory and
//! PostgreSQL implementations of the user repository port.

mod password;
mod postgres_repository;
mod repository;

pub use password::{Argon2Hasher, PasswordHasher, PasswordHashingConfig};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;

#[cfg(test)]
pub use password::MockPasswordHasher;
