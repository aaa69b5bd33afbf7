//! Trait for cache service integration

use async_trait::async_trait;

use crate::domain::entities::order::Order;

/// Trait for cache service integration
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Mirror an order as a hash under `order:<cid>` and index it by creation time
    async fn cache_order(&self, order: &Order) -> Result<(), String>;

    /// Remove an order's hash and its index entry
    async fn evict_order(&self, consignment_id: &str) -> Result<(), String>;

    /// Store a string value that expires after `ttl_seconds`
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Get a string value, `None` when missing or expired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Delete a key of any type
    async fn delete(&self, key: &str) -> Result<(), String>;
}
