//! Authentication infrastructure module
//!
//! This module provides JWT token issuing and the authentication service
//! that ties together the user repository, password hasher and issuer.

mod jwt;
mod service;

pub use jwt::{JwtConfig, JwtTokenIssuer, TokenIssuer};
pub use service::AuthenticationService;
