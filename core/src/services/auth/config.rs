//! Configuration for the authentication service

use order_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Seconds a token mirror lives in the cache
    pub token_cache_ttl: u64,
    /// Revoke existing tokens before issuing a new pair
    pub single_session: bool,
    /// Work factor of the placeholder hash checked when no user matches
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            token_cache_ttl: 600,
            single_session: true,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            token_cache_ttl: config.token_cache_ttl,
            bcrypt_cost: config.bcrypt_cost,
            ..Default::default()
        }
    }
}
