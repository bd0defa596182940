//! User entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::UserValidationError;

/// Numeric user identifier assigned by the repository on save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Placeholder carried by users that have not been persisted yet
    pub const UNASSIGNED: UserId = UserId(0);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// True for the zero value that no stored user can have
    pub fn is_unassigned(&self) -> bool {
        self.0 <= 0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i64 = s
            .parse()
            .map_err(|_| UserValidationError::InvalidId(s.to_string()))?;

        if id <= 0 {
            return Err(UserValidationError::InvalidId(s.to_string()));
        }

        Ok(Self(id))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered user identity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: UserId,
    /// Unique login email
    email: String,
    /// Unique display name, stored trimmed
    username: String,
    /// Encoded password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a user that has not been persisted yet
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::UNASSIGNED,
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a stored user from its persisted fields
    pub fn from_parts(
        id: UserId,
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at,
        }
    }

    /// Attach the identifier assigned by storage
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// A lookup may hand back an empty record instead of a miss
    pub fn is_sentinel(&self) -> bool {
        self.id.is_unassigned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unassigned() {
        let user = User::new("a@x.com", "alice", "hash");

        assert_eq!(user.id(), UserId::UNASSIGNED);
        assert!(user.is_sentinel());
        assert_eq!(user.email(), "a@x.com");
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password_hash(), "hash");
    }

    #[test]
    fn test_with_id() {
        let user = User::new("a@x.com", "alice", "hash").with_id(UserId::new(42));

        assert_eq!(user.id().value(), 42);
        assert!(!user.is_sentinel());
    }

    #[test]
    fn test_user_id_from_str() {
        assert_eq!("17".parse::<UserId>().unwrap(), UserId::new(17));
        assert!("0".parse::<UserId>().is_err());
        assert!("-3".parse::<UserId>().is_err());
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(5).to_string(), "5");
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = User::new("a@x.com", "alice", "$argon2id$secret-hash").with_id(UserId::new(1));

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"id\":1"));
    }
}
