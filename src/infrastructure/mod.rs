//! Infrastructure layer - Hashing, signing and storage implementations

pub mod auth;
pub mod logging;
pub mod user;
