//! Auth - autenticazione stateless
//!
//! Three pieces, leaf first:
//! - [`password`]: bcrypt credential hashing and verification
//! - [`jwt`]: issuing and verifying signed, expiring HS256 tokens
//! - [`middleware`]: the access gate in front of protected routes

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, TOKEN_VALIDITY_SECS, TokenService};
pub use middleware::{BEARER_PREFIX, authentication_middleware, authorize, bearer_token};
pub use password::{CredentialHasher, DEFAULT_BCRYPT_COST};

use thiserror::Error;

/// Failures produced by the authentication core.
///
/// `Display` is the short, human-readable reason that ends up in the
/// `error` field of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Bad signature, bad structure, or claims of the wrong shape.
    #[error("invalid token")]
    InvalidToken,

    /// Structurally valid token past its expiry.
    #[error("token has expired")]
    Expired,

    /// Rejected by the access gate.
    #[error("{0}")]
    Unauthenticated(&'static str),

    /// Plaintext does not match the stored hash.
    #[error("password is incorrect")]
    Mismatch,

    /// The hashing primitive failed.
    #[error("failed to hash password")]
    HashingFailure,

    /// The signing primitive failed.
    #[error("failed to sign token")]
    SigningFailure,
}

impl AuthError {
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::InvalidToken => "invalid token",
            AuthError::Expired => "token has expired",
            AuthError::Unauthenticated(reason) => reason,
            AuthError::Mismatch => "password is incorrect",
            AuthError::HashingFailure => "failed to hash password",
            AuthError::SigningFailure => "failed to sign token",
        }
    }
}
