//! Token repository trait defining the interface for issued token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::{StoredToken, TokenKind};
use crate::errors::DomainError;

/// Repository trait for access and refresh token rows
///
/// Revocation is a soft delete: the row keeps its token string and gets a
/// `deleted_at` timestamp.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a newly issued token
    ///
    /// # Returns
    /// * `Ok(StoredToken)` - The saved token with its store-assigned id
    /// * `Err(DomainError)` - Save failed
    async fn save(&self, token: StoredToken) -> Result<StoredToken, DomainError>;

    /// Find a token row that is neither revoked nor expired and belongs to `user_id`
    ///
    /// # Returns
    /// * `Ok(Some(StoredToken))` - Token is live
    /// * `Ok(None)` - Unknown, revoked, expired or owned by someone else
    async fn find_active(
        &self,
        kind: TokenKind,
        user_id: i64,
        token: &str,
    ) -> Result<Option<StoredToken>, DomainError>;

    /// Revoke every non-revoked token of `kind` owned by `user_id`
    ///
    /// # Returns
    /// The rows that were not yet revoked before this call (empty when there were none)
    async fn revoke_all_for_user(
        &self,
        kind: TokenKind,
        user_id: i64,
    ) -> Result<Vec<StoredToken>, DomainError>;
}
