//! Application state for shared services

use std::sync::Arc;

use crate::domain::auth::{AuthError, RefreshedToken, SignupAck, TokenPair};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::{AuthenticationService, TokenIssuer};
use crate::infrastructure::user::PasswordHasher;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<dyn AuthServiceTrait>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            auth_service,
            token_issuer,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Trait for authentication service operations
#[async_trait::async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError>;
    async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<SignupAck, AuthError>;
    fn refresh_token(&self, user: &User) -> Result<RefreshedToken, AuthError>;
    async fn user_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R, H, T> AuthServiceTrait for AuthenticationService<R, H, T>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        AuthenticationService::login(self, email, password).await
    }

    async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<SignupAck, AuthError> {
        AuthenticationService::signup(self, email, username, password).await
    }

    fn refresh_token(&self, user: &User) -> Result<RefreshedToken, AuthError> {
        AuthenticationService::refresh_token(self, user)
    }

    async fn user_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        AuthenticationService::user_by_id(self, id).await
    }
}
