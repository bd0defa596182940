//! User authentication endpoints
//!
//! Provides signup, login, token refresh and a token-protected echo route.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{RequireRefreshUser, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::auth::{RefreshedToken, SignupAck, TokenPair};

/// Create the user authentication router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/refresh", get(refresh))
        .route("/protected", get(protected))
}

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
}

/// Register a new user
///
/// POST /api/v1/user/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupAck>), ApiError> {
    let ack = state
        .auth_service
        .signup(&request.email, &request.username, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(ack)))
}

/// Login with email and password
///
/// POST /api/v1/user/login
///
/// Returns an access/refresh token pair on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenPair>, ApiError> {
    let pair = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(pair))
}

/// Issue a new access token for the bearer of a valid refresh token
///
/// GET /api/v1/user/refresh
pub async fn refresh(
    State(state): State<AppState>,
    RequireRefreshUser(user): RequireRefreshUser,
) -> Result<Json<RefreshedToken>, ApiError> {
    let token = state.auth_service.refresh_token(&user)?;
    Ok(Json(token))
}

/// Echo the user authenticated by an access token
///
/// GET /api/v1/user/protected
pub async fn protected(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id().value(),
        email: user.email().to_string(),
        username: user.username().to_string(),
    })
}
