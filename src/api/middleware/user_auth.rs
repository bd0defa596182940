//! Bearer-token authentication for protected routes

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::{TokenError, TokenKind};
use crate::domain::user::User;

/// Extractor that requires a valid, unexpired access token for an existing user
///
/// Extracts the JWT token from:
/// - Authorization header: `Bearer <jwt_token>`
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, state, TokenKind::Access)
            .await
            .map(RequireUser)
    }
}

/// Extractor that requires a valid, unexpired refresh token for an existing user
#[derive(Debug, Clone)]
pub struct RequireRefreshUser(pub User);

impl FromRequestParts<AppState> for RequireRefreshUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, state, TokenKind::Refresh)
            .await
            .map(RequireRefreshUser)
    }
}

async fn authenticate(
    headers: &HeaderMap,
    state: &AppState,
    expected: TokenKind,
) -> Result<User, ApiError> {
    let token = extract_jwt_token(headers)?;

    debug!(kind = %expected, "Validating JWT token");

    let claims = state.token_issuer.verify(&token).map_err(|e| match e {
        TokenError::Expired => ApiError::unauthorized("Token has expired"),
        TokenError::Invalid(_) => ApiError::unauthorized("Invalid token"),
    })?;

    if claims.typ != expected {
        return Err(ApiError::unauthorized(format!(
            "Wrong token type, expected {}",
            expected
        )));
    }

    let user_id = claims
        .user_id()
        .map_err(|_| ApiError::unauthorized("Invalid token subject"))?;

    state
        .auth_service
        .user_by_id(&user_id)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "User lookup failed during token authentication");
            ApiError::internal("Failed to load user")
        })?
        .ok_or_else(|| ApiError::unauthorized("User not found"))
}

/// Extract JWT token from Authorization header
pub fn extract_jwt_token(headers: &HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            let token = token.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Provide JWT token via 'Authorization: Bearer <token>' header",
    ))
}
