//! Domain layer - Core business logic and entities

pub mod auth;
pub mod error;
pub mod user;

pub use error::DomainError;
