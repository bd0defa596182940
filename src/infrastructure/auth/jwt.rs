//! JWT token issuing and validation (HS256)

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::fmt::Debug;

use crate::domain::auth::{Claims, SigningError, TokenError, TokenKind};
use crate::domain::user::UserId;

#[cfg(test)]
use mockall::automock;

/// Configuration for the token issuer
#[derive(Clone, Default)]
pub struct JwtConfig {
    /// Shared secret used to sign access and refresh tokens
    pub secret: String,
}

impl JwtConfig {
    /// Create new JWT configuration
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .finish()
    }
}

/// Mints and checks signed, time-bounded claim sets
#[cfg_attr(test, automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign a `kind` token for `subject` that expires `ttl` from now
    fn issue(
        &self,
        subject: &UserId,
        username: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, SigningError>;

    /// Check signature and expiry of a token and return its claims
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// HS256 token issuer holding its own signing secret
#[derive(Clone)]
pub struct JwtTokenIssuer {
    has_secret: bool,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("has_secret", &self.has_secret)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtTokenIssuer {
    /// Create a new issuer with the given configuration
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();

        Self {
            has_secret: !secret.is_empty(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        subject: &UserId,
        username: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, SigningError> {
        if !self.has_secret {
            return Err(SigningError::MissingSecret);
        }

        let claims = Claims::new(subject, username, kind, ttl, Utc::now());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SigningError::Encoding(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if !self.has_secret {
            return Err(TokenError::Invalid("signing secret is not configured".to_string()));
        }

        decode::<Claims>(token, &self.decoding_key, &Self::validation())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}
