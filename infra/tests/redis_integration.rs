//! Integration tests for the Redis cache mirror
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p order_infra --test redis_integration -- --ignored

use order_core::domain::entities::order::{DeliveryType, FeeBreakdown, ItemType, Order, OrderDraft};
use order_core::services::cache::CacheServiceTrait;
use order_infra::cache::{CacheConfig, RedisCache, RedisClient};

async fn cache() -> RedisCache {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );
    RedisCache::new(RedisClient::new(config).await.unwrap())
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_token_mirror_roundtrip() {
    let cache = cache().await;
    let key = "access_token:integration-test";

    cache.set_with_expiry(key, "42", 60).await.unwrap();
    assert_eq!(cache.get(key).await.unwrap(), Some("42".to_string()));

    cache.delete(key).await.unwrap();
    assert_eq!(cache.get(key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_order_mirror_and_evict() {
    let cache = cache().await;
    let order = Order::from_draft(
        OrderDraft::default(),
        1,
        "CNTEST0000001".to_string(),
        FeeBreakdown::default(),
        DeliveryType::Delivery,
        ItemType::Parcel,
    );

    cache.cache_order(&order).await.unwrap();
    cache.evict_order(&order.consignment_id).await.unwrap();
    assert!(!cache.client().delete("order:CNTEST0000001").await.unwrap());
}
