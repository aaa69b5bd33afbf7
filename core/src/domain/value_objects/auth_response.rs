//! Login response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;

/// Token type advertised to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Unix timestamp at which the access token expires
    pub expires_in: i64,
}

impl From<TokenPair> for LoginResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            expires_in: pair.access.claims.exp,
            access_token: pair.access.token,
            refresh_token: pair.refresh.token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}
