//! User repository port

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Storage boundary for user records
///
/// Lookups return `Ok(None)` for a miss and reserve `Err` for storage failures.
/// Uniqueness of email and username must be enforced atomically by `save`;
/// callers only pre-check with the `exists_*` methods.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by email (for login)
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Check if an email is already registered
    async fn exists_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check if a username is already taken
    async fn exists_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Persist a new user and return it with its assigned ID
    async fn save(&self, user: User) -> Result<User, DomainError>;
}
