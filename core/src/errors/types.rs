//! Domain-specific error types for authentication and token handling
//!
//! Response wording lives in the presentation layer; these variants only
//! describe what failed.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing credentials")]
    MissingCredentials,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Unexpected signing algorithm")]
    UnexpectedAlgorithm,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Whether this error is caused by the presented token rather than by the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TokenError::TokenGenerationFailed)
    }
}
