//! Authentication error taxonomy

use thiserror::Error;

/// Failure of a login, signup or refresh call
///
/// The display string is the message shown to clients. Variants carry no
/// payload so password, hash or driver details cannot leak through them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid Email and/or Password")]
    InvalidCredentials,

    #[error("Email is not registered")]
    EmailNotRegistered,

    #[error("Failed to generate access/refresh token")]
    FailedAccessTokenGen,

    #[error("Email already exists")]
    EmailAlreadyRegistered,

    #[error("Username already exists")]
    UsernameAlreadyRegistered,

    #[error("Failed to hash password")]
    FailedToHashPassword,

    #[error("Password must be no longer than 72 characters")]
    PasswordLenExceeded,

    #[error("Failed to save")]
    SaveFailed,
}

/// Class of an [`AuthError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Unknown email or wrong password; the two are reported identically
    Credential,
    Conflict,
    Validation,
    CryptoFailure,
    Persistence,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::InvalidCredentials | Self::EmailNotRegistered => AuthErrorKind::Credential,
            Self::EmailAlreadyRegistered | Self::UsernameAlreadyRegistered => {
                AuthErrorKind::Conflict
            }
            Self::PasswordLenExceeded => AuthErrorKind::Validation,
            Self::FailedToHashPassword | Self::FailedAccessTokenGen => {
                AuthErrorKind::CryptoFailure
            }
            Self::SaveFailed => AuthErrorKind::Persistence,
        }
    }
}

/// Failure of the password hashing primitive
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashingError {
    #[error("Password exceeds maximum input length of {max} bytes")]
    InputTooLong { max: usize },

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Hashing primitive failed: {0}")]
    Primitive(String),
}

/// Failure to produce a signed token
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    Encoding(String),
}

/// Failure to accept a presented token
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),
}
