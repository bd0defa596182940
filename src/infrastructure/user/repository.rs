//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    /// Index for email -> user ID lookup
    email_index: HashMap<String, UserId>,
    /// Index for username -> user ID lookup
    username_index: HashMap<String, UserId>,
}

/// In-memory implementation of UserRepository
///
/// Uniqueness is re-checked under the write lock in `save`, so two racing
/// signups that both passed the `exists_*` checks cannot both be stored.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .email_index
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(id).cloned())
    }

    async fn exists_email(&self, email: &str) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.email_index.contains_key(email))
    }

    async fn exists_username(&self, username: &str) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.username_index.contains_key(username))
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.email_index.contains_key(user.email()) {
            return Err(DomainError::conflict("Email already exists"));
        }

        if tables.username_index.contains_key(user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = user.with_id(id);

        tables.email_index.insert(user.email().to_string(), id);
        tables.username_index.insert(user.username().to_string(), id);
        tables.users.insert(id, user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(email: &str, username: &str) -> User {
        User::new(email, username, "hashed_password")
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(create_test_user("a@x.com", "alice")).await.unwrap();
        let second = repo.save(create_test_user("b@x.com", "bob")).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("a@x.com", "alice")).await.unwrap();

        let retrieved = repo.get_by_email("a@x.com").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().username(), "alice");

        let not_found = repo.get_by_email("nobody@x.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(create_test_user("a@x.com", "alice")).await.unwrap();

        let retrieved = repo.get_by_id(&saved.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.email(), "a@x.com");

        assert!(repo.get_by_id(&UserId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_checks() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.is_empty().await);

        repo.save(create_test_user("a@x.com", "alice")).await.unwrap();

        assert!(repo.exists_email("a@x.com").await.unwrap());
        assert!(!repo.exists_email("b@x.com").await.unwrap());
        assert!(repo.exists_username("alice").await.unwrap());
        assert!(!repo.exists_username("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("a@x.com", "alice")).await.unwrap();

        let result = repo.save(create_test_user("a@x.com", "other")).await;
        assert!(result.unwrap_err().is_conflict());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        repo.save(create_test_user("a@x.com", "alice")).await.unwrap();

        let result = repo.save(create_test_user("b@x.com", "alice")).await;
        assert!(result.unwrap_err().is_conflict());
        assert!(!repo.exists_email("b@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_saves_with_same_email() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save(create_test_user("same@x.com", &format!("user{}", i)))
                        .await
                })
            })
            .collect();

        let mut stored = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                stored += 1;
            }
        }

        assert_eq!(stored, 1);
        assert_eq!(repo.len().await, 1);
    }
}
