//! Request extractors guarding protected routes

mod user_auth;

pub use user_auth::{extract_jwt_token, RequireRefreshUser, RequireUser};
