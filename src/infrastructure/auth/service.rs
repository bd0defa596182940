//! Authentication service: login, signup and token refresh

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::auth::{
    AuthError, RefreshedToken, SignupAck, TokenKind, TokenPair, ACCESS_TOKEN_TTL,
    REFRESH_TOKEN_TTL,
};
use crate::domain::user::{normalize_username, validate_password, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::PasswordHasher;

use super::jwt::TokenIssuer;

/// Stateless orchestration of credential checks and token issuance
///
/// Every call is independent; all shared mutable state lives behind the
/// repository.
#[derive(Debug)]
pub struct AuthenticationService<R: UserRepository, H: PasswordHasher, T: TokenIssuer> {
    repository: Arc<R>,
    hasher: Arc<H>,
    issuer: Arc<T>,
}

impl<R: UserRepository, H: PasswordHasher, T: TokenIssuer> AuthenticationService<R, H, T> {
    /// Create a new authentication service
    pub fn new(repository: Arc<R>, hasher: Arc<H>, issuer: Arc<T>) -> Self {
        Self {
            repository,
            hasher,
            issuer,
        }
    }

    /// Exchange an email/password pair for an access and refresh token
    ///
    /// An unknown email and a wrong password fail with the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = match self.repository.get_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("Login rejected: no matching account");
                return Err(AuthError::EmailNotRegistered);
            }
            Err(e) => {
                warn!(error = %e, "User lookup failed during login");
                return Err(AuthError::EmailNotRegistered);
            }
        };

        if user.is_sentinel() {
            warn!("User lookup returned an unassigned record");
            return Err(AuthError::InvalidCredentials);
        }

        match self.hasher.verify(user.password_hash(), password) {
            Ok(true) => {}
            Ok(false) => {
                debug!(user_id = %user.id(), "Login rejected: password mismatch");
                return Err(AuthError::EmailNotRegistered);
            }
            Err(e) => {
                warn!(user_id = %user.id(), error = %e, "Password verification failed");
                return Err(AuthError::EmailNotRegistered);
            }
        }

        let access_token = self.sign(&user, TokenKind::Access, ACCESS_TOKEN_TTL)?;
        let refresh_token = self.sign(&user, TokenKind::Refresh, REFRESH_TOKEN_TTL)?;

        info!(user_id = %user.id(), "User logged in");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Register a new user
    ///
    /// No tokens are issued; the caller logs in afterwards.
    pub async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<SignupAck, AuthError> {
        validate_password(password).map_err(|_| AuthError::PasswordLenExceeded)?;
        let username = normalize_username(username);

        if self
            .repository
            .exists_email(email)
            .await
            .map_err(persistence_failure)?
        {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        if self
            .repository
            .exists_username(&username)
            .await
            .map_err(persistence_failure)?
        {
            return Err(AuthError::UsernameAlreadyRegistered);
        }

        let password_hash = self.hasher.hash(password).map_err(|e| {
            warn!(error = %e, "Password hashing failed");
            AuthError::FailedToHashPassword
        })?;

        let user = User::new(email, username, password_hash);

        let saved = self
            .repository
            .save(user)
            .await
            .map_err(persistence_failure)?;

        info!(user_id = %saved.id(), "User signed up");

        Ok(SignupAck::created())
    }

    /// Mint a fresh access token for a user whose refresh token was already validated
    ///
    /// The new token is an access token and cannot itself be used to refresh.
    pub fn refresh_token(&self, user: &User) -> Result<RefreshedToken, AuthError> {
        let access_token = self.sign(user, TokenKind::Access, ACCESS_TOKEN_TTL)?;

        debug!(user_id = %user.id(), "Access token refreshed");

        Ok(RefreshedToken { access_token })
    }

    /// Look up a user by ID (for bearer-token authentication)
    pub async fn user_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.repository.get_by_id(id).await
    }

    fn sign(
        &self,
        user: &User,
        kind: TokenKind,
        ttl: chrono::Duration,
    ) -> Result<String, AuthError> {
        self.issuer
            .issue(&user.id(), user.username(), kind, ttl)
            .map_err(|e| {
                warn!(user_id = %user.id(), error = %e, "Token signing failed");
                AuthError::FailedAccessTokenGen
            })
    }
}

fn persistence_failure(e: DomainError) -> AuthError {
    warn!(error = %e, "User repository failure during signup");
    AuthError::SaveFailed
}
