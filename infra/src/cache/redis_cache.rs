//! Redis-backed cache mirror for orders and tokens

use async_trait::async_trait;

use order_core::domain::entities::order::Order;
use order_core::services::cache::keys::{order_fields, order_key, ORDERS_INDEX};
use order_core::services::cache::CacheServiceTrait;

use super::redis_client::RedisClient;

/// Implements the core cache port on top of [`RedisClient`]
#[derive(Clone)]
pub struct RedisCache {
    client: RedisClient,
}

impl RedisCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl CacheServiceTrait for RedisCache {
    async fn cache_order(&self, order: &Order) -> Result<(), String> {
        let key = order_key(&order.consignment_id);
        self.client
            .hset_multiple(&key, &order_fields(order))
            .await
            .map_err(|e| e.to_string())?;
        self.client
            .zadd(ORDERS_INDEX, &order.consignment_id, order.created_at.timestamp())
            .await
            .map_err(|e| e.to_string())
    }

    async fn evict_order(&self, consignment_id: &str) -> Result<(), String> {
        self.client
            .delete(&order_key(consignment_id))
            .await
            .map_err(|e| e.to_string())?;
        self.client
            .zrem(ORDERS_INDEX, consignment_id)
            .await
            .map_err(|e| e.to_string())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client.get(key).await.map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.client
            .delete(key)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
