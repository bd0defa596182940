//! User domain
//!
//! This module provides the user identity record, the repository port the
//! authentication core depends on, and the input rules checked before
//! hashing or storage.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    normalize_username, validate_password, UserValidationError, MAX_PASSWORD_BYTES,
};

#[cfg(test)]
pub use repository::MockUserRepository;
