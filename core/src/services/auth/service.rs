//! Main authentication service implementation

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::domain::entities::token::{SignedToken, StoredToken, TokenKind};
use crate::domain::value_objects::LoginResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::cache::keys::{session_key, token_key};
use crate::services::cache::CacheServiceTrait;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Checked against the placeholder hash so unknown users cost as much as wrong passwords
const PLACEHOLDER_PASSWORD: &str = "placeholder-password-never-issued";

/// Login input: a password plus a user name, an email, or both
#[derive(Debug, Clone, Default)]
pub struct LoginCredentials {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

impl LoginCredentials {
    fn identifiers(&self) -> (Option<&str>, Option<&str>) {
        fn non_blank(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }
        (non_blank(&self.user_name), non_blank(&self.email))
    }
}

/// Authentication service for login and logout
pub struct AuthService<U, T, C>
where
    U: UserRepository + ?Sized,
    T: TokenRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Issued token rows
    token_repository: Arc<T>,
    /// Token mirror for the request gate fast path
    cache: Arc<C>,
    /// Token service for JWT signing
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
    /// bcrypt hash of [`PLACEHOLDER_PASSWORD`], built on first use
    placeholder_hash: OnceCell<String>,
}

impl<U, T, C> AuthService<U, T, C>
where
    U: UserRepository + ?Sized,
    T: TokenRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user lookup
    /// * `token_repository` - Repository for issued tokens
    /// * `cache` - Cache mirror for token liveness
    /// * `token_service` - Service for JWT signing
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        cache: Arc<C>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            cache,
            token_service,
            config,
            placeholder_hash: OnceCell::new(),
        }
    }

    /// Authenticate a user and issue a fresh token pair
    ///
    /// This method:
    /// 1. Looks the user up by user name or email in a single query
    /// 2. Verifies the password against the bcrypt hash
    /// 3. Revokes the user's previous session
    /// 4. Signs, persists and cache-mirrors a new access and refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - Token pair and access token expiry
    /// * `Err(DomainError::Auth)` - Missing identifiers, unknown user or wrong password
    /// * `Err(DomainError::Token)` - Signing failed
    /// * `Err(DomainError::Persistence)` - Store failure
    pub async fn login(&self, credentials: LoginCredentials) -> DomainResult<LoginResponse> {
        let (user_name, email) = credentials.identifiers();
        if (user_name.is_none() && email.is_none()) || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let user = match self.user_repository.find_by_login(user_name, email).await? {
            Some(user) => user,
            None => {
                self.verify_placeholder(&credentials.password);
                tracing::info!(user_name = ?user_name, email = ?email, "Login failed: user not found");
                return Err(AuthError::UserNotFound.into());
            }
        };

        if !verify_password(&credentials.password, &user.password_hash) {
            tracing::info!(user_id = user.id, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        if self.config.single_session {
            self.logout(user.id).await?;
        }

        let pair = self.token_service.issue_pair(user.id)?;
        self.persist(TokenKind::Access, &pair.access, user.id).await?;
        self.persist(TokenKind::Refresh, &pair.refresh, user.id).await?;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(LoginResponse::from(pair))
    }

    /// Revoke every token the user holds
    ///
    /// Store revocation is authoritative; cache deletions are best-effort.
    /// A user without live tokens logs out successfully.
    pub async fn logout(&self, user_id: i64) -> DomainResult<()> {
        let mut revoked = self
            .token_repository
            .revoke_all_for_user(TokenKind::Access, user_id)
            .await?;
        revoked.extend(
            self.token_repository
                .revoke_all_for_user(TokenKind::Refresh, user_id)
                .await?,
        );

        self.evict(&session_key(user_id), "session").await;
        for token in &revoked {
            self.evict(&token_key(token.kind, &token.token), token.kind.as_str())
                .await;
        }

        tracing::info!(user_id = user_id, revoked = revoked.len(), "User logged out");
        Ok(())
    }

    fn verify_placeholder(&self, password: &str) {
        let hash = self
            .placeholder_hash
            .get_or_try_init(|| hash_password(PLACEHOLDER_PASSWORD, self.config.bcrypt_cost));
        match hash {
            Ok(hash) => {
                verify_password(password, hash);
            }
            Err(e) => tracing::warn!(error = %e, "Placeholder password hash unavailable"),
        }
    }

    #[cfg(test)]
    pub(crate) fn placeholder_hash(&self) -> Option<&str> {
        self.placeholder_hash.get().map(String::as_str)
    }

    async fn persist(&self, kind: TokenKind, signed: &SignedToken, user_id: i64) -> Result<(), DomainError> {
        let row = StoredToken::new(kind, signed.token.clone(), user_id, signed.claims.expires_at());
        self.token_repository.save(row).await?;

        if let Err(e) = self
            .cache
            .set_with_expiry(
                &token_key(kind, &signed.token),
                &user_id.to_string(),
                self.config.token_cache_ttl,
            )
            .await
        {
            tracing::warn!(user_id = user_id, kind = kind.as_str(), error = %e, "Failed to mirror token into cache");
        }
        Ok(())
    }

    /// `label` names the key family; token keys are never logged verbatim
    async fn evict(&self, key: &str, label: &str) {
        if let Err(e) = self.cache.delete(key).await {
            tracing::warn!(key = label, error = %e, "Failed to delete cache key");
        }
    }
}
