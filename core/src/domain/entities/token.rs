//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Default refresh token lifetime (7 days)
pub const REFRESH_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 3600;

/// JWT claims carried by both access and refresh tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric owner of the token
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token id so tokens minted in the same second never collide
    #[serde(default)]
    pub jti: String,
}

impl Claims {
    /// Creates claims valid for `ttl_seconds` from now
    pub fn new(user_id: i64, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

/// Which table / cache namespace a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access_token",
            TokenKind::Refresh => "refresh_token",
        }
    }
}

/// A token row as persisted in `access_tokens` / `refresh_tokens`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    /// Store-assigned id (0 until inserted)
    pub id: i64,
    pub kind: TokenKind,
    pub token: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Set when the token is revoked
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StoredToken {
    pub fn new(kind: TokenKind, token: impl Into<String>, user_id: i64, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            kind,
            token: token.into(),
            user_id,
            expires_at,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn is_revoked(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Live means neither revoked nor expired
    pub fn is_active(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}

/// A freshly signed token together with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    pub token: String,
    pub claims: Claims,
}

/// Access and refresh token issued together at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: SignedToken,
    pub refresh: SignedToken,
}
