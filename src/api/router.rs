use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // User endpoints (signup/login open, refresh/protected need a bearer token)
        .nest("/api/v1/user", auth::create_user_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
