//! User input rules applied before anything touches storage or hashing

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Invalid user ID: '{0}'")]
    InvalidId(String),

    #[error("Password exceeds maximum length of {0} bytes")]
    PasswordTooLong(usize),
}

/// Upper bound on plaintext password size accepted by the hasher, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Validate a plaintext password length
///
/// The limit is measured in bytes, not characters, so multi-byte UTF-8
/// input reaches the limit sooner than ASCII input.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_BYTES));
    }

    Ok(())
}

/// Strip surrounding whitespace from a username before it is stored
pub fn normalize_username(username: &str) -> String {
    username.trim().to_string()
}
