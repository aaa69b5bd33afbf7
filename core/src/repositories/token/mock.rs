//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::{StoredToken, TokenKind};
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// Mock token repository for testing
#[derive(Clone, Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<Vec<StoredToken>>>,
    next_id: Arc<AtomicI64>,
    unavailable: Arc<AtomicBool>,
}

impl MockTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with a persistence error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("token store unavailable"));
        }
        Ok(())
    }

    /// Every stored row of `kind`, revoked ones included
    pub async fn rows(&self, kind: TokenKind) -> Vec<StoredToken> {
        self.tokens
            .read()
            .await
            .iter()
            .filter(|t| t.kind == kind)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, mut token: StoredToken) -> Result<StoredToken, DomainError> {
        self.check_available()?;
        let mut tokens = self.tokens.write().await;
        token.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        tokens.push(token.clone());
        Ok(token)
    }

    async fn find_active(
        &self,
        kind: TokenKind,
        user_id: i64,
        token: &str,
    ) -> Result<Option<StoredToken>, DomainError> {
        self.check_available()?;
        let tokens = self.tokens.read().await;
        Ok(tokens
            .iter()
            .find(|t| t.kind == kind && t.user_id == user_id && t.token == token && t.is_active())
            .cloned())
    }

    async fn revoke_all_for_user(
        &self,
        kind: TokenKind,
        user_id: i64,
    ) -> Result<Vec<StoredToken>, DomainError> {
        self.check_available()?;
        let mut tokens = self.tokens.write().await;
        let now = Utc::now();

        let mut revoked = Vec::new();
        for token in tokens
            .iter_mut()
            .filter(|t| t.kind == kind && t.user_id == user_id && !t.is_revoked())
        {
            revoked.push(token.clone());
            token.deleted_at = Some(now);
        }
        Ok(revoked)
    }
}
