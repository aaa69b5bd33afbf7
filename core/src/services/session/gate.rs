//! Bearer token verification against signature, cache and store.

use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::TokenRepository;
use crate::services::cache::keys::token_key;
use crate::services::cache::CacheServiceTrait;
use crate::services::token::TokenService;

/// Verifies access tokens for protected endpoints
///
/// A token passes when its HS256 signature and expiry check out and it is
/// either mirrored in the cache for the same user or present and unrevoked
/// in the token store. A store hit repopulates the cache.
pub struct SessionGate<T, C>
where
    T: TokenRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    token_service: Arc<TokenService>,
    token_repository: Arc<T>,
    cache: Arc<C>,
    cache_ttl: u64,
}

impl<T, C> SessionGate<T, C>
where
    T: TokenRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    pub fn new(
        token_service: Arc<TokenService>,
        token_repository: Arc<T>,
        cache: Arc<C>,
        cache_ttl: u64,
    ) -> Self {
        Self {
            token_service,
            token_repository,
            cache,
            cache_ttl,
        }
    }

    /// Authenticate a raw bearer token, returning its claims
    pub async fn authenticate(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.token_service.verify(token)?;
        let user_id = claims.user_id.to_string();
        let key = token_key(TokenKind::Access, token);

        match self.cache.get(&key).await {
            Ok(Some(cached)) if cached == user_id => {
                tracing::debug!(user_id = claims.user_id, "Token accepted from cache");
                return Ok(claims);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Token cache lookup failed, falling back to store");
            }
        }

        let live = self
            .token_repository
            .find_active(TokenKind::Access, claims.user_id, token)
            .await?;
        if live.is_none() {
            tracing::debug!(user_id = claims.user_id, "Token not live in store");
            return Err(TokenError::TokenRevoked.into());
        }

        if let Err(e) = self.cache.set_with_expiry(&key, &user_id, self.cache_ttl).await {
            tracing::warn!(user_id = claims.user_id, error = %e, "Failed to repopulate token cache");
        }

        Ok(claims)
    }
}
