//! Gridroom authentication service
//!
//! User accounts with:
//! - Signup with unique email and username
//! - Login issuing an access/refresh token pair
//! - Bearer-token refresh of short-lived access tokens

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use api::state::AppState;
use crate::config::StorageBackend;
use domain::user::UserRepository;
use infrastructure::{
    auth::{AuthenticationService, JwtTokenIssuer},
    user::{Argon2Hasher, InMemoryUserRepository, PostgresUserRepository},
};

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.auth.jwt_secret.is_empty() {
        anyhow::bail!("auth.jwt_secret must be set (e.g. APP__AUTH__JWT_SECRET)");
    }

    let hasher = Arc::new(
        Argon2Hasher::new(&config.auth.password_hashing)
            .context("Invalid password hashing parameters")?,
    );
    let issuer = Arc::new(JwtTokenIssuer::new(&config.auth.jwt_config()));

    info!("Storage backend: {:?}", config.storage.backend);

    let state = match config.storage.backend {
        StorageBackend::Memory => {
            build_state(Arc::new(InMemoryUserRepository::new()), hasher, issuer)
        }
        StorageBackend::Postgres => {
            let database_url = config
                .storage
                .database_url
                .as_deref()
                .context("storage.database_url is required for the postgres backend")?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(database_url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            info!("PostgreSQL connection established");

            let repository = PostgresUserRepository::new(pool);
            repository
                .ensure_schema()
                .await
                .context("Failed to prepare users table")?;

            build_state(Arc::new(repository), hasher, issuer)
        }
    };

    Ok(state)
}

fn build_state<R>(
    repository: Arc<R>,
    hasher: Arc<Argon2Hasher>,
    issuer: Arc<JwtTokenIssuer>,
) -> AppState
where
    R: UserRepository + 'static,
{
    let service = AuthenticationService::new(repository, hasher, issuer.clone());
    AppState::new(Arc::new(service), issuer)
}
