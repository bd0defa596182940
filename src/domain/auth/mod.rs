//! Authentication domain
//!
//! Claim sets, the shapes returned from login/signup/refresh, and the
//! closed set of errors those calls can fail with.

mod claims;
mod error;
mod token;

pub use claims::{Claims, TokenKind};
pub use error::{AuthError, AuthErrorKind, HashingError, SigningError, TokenError};
pub use token::{RefreshedToken, SignupAck, TokenPair, ACCESS_TOKEN_TTL, REFRESH_TOKEN_TTL};
