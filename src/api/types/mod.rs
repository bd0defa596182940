//! Request/response types shared by the HTTP handlers

mod error;
mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
