//! Tests for the in-memory cache and key layout

use std::time::Duration;

use crate::domain::entities::order::{DeliveryType, FeeBreakdown, ItemType, Order, OrderDraft};
use crate::domain::entities::token::TokenKind;
use crate::services::cache::keys::{order_key, session_key, token_key};
use crate::services::cache::{CacheServiceTrait, MockCacheService};

fn order(consignment_id: &str) -> Order {
    Order::from_draft(
        OrderDraft {
            merchant_order_id: Some("M-1".to_string()),
            ..Default::default()
        },
        1,
        consignment_id.to_string(),
        FeeBreakdown {
            delivery_fee: 60.0,
            cod_fee: 5.0,
            total_fee: 65.0,
        },
        DeliveryType::Delivery,
        ItemType::Parcel,
    )
}

#[test]
fn test_key_layout() {
    assert_eq!(order_key("CN2401011ABCDE"), "order:CN2401011ABCDE");
    assert_eq!(token_key(TokenKind::Access, "abc"), "access_token:abc");
    assert_eq!(token_key(TokenKind::Refresh, "abc"), "refresh_token:abc");
    assert_eq!(session_key(42), "session:42");
}

#[tokio::test]
async fn test_cache_and_evict_order() {
    let cache = MockCacheService::new();
    cache.cache_order(&order("CN1")).await.unwrap();

    let hash = cache.hash("order:CN1").await.unwrap();
    assert_eq!(hash["consignment_id"], "CN1");
    assert_eq!(hash["merchant_order_id"], "M-1");
    assert_eq!(hash["order_status"], "Pending");
    assert_eq!(hash["delivery_fee"], "60");
    assert_eq!(cache.indexed_orders().await, vec!["CN1"]);

    cache.evict_order("CN1").await.unwrap();
    assert!(cache.hash("order:CN1").await.is_none());
    assert!(cache.indexed_orders().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_values_expire_after_ttl() {
    let cache = MockCacheService::new();
    cache.set_with_expiry("access_token:t", "7", 600).await.unwrap();
    assert_eq!(cache.get("access_token:t").await.unwrap().as_deref(), Some("7"));

    tokio::time::advance(Duration::from_secs(601)).await;
    assert_eq!(cache.get("access_token:t").await.unwrap(), None);
    assert!(!cache.contains("access_token:t").await);
}

#[tokio::test]
async fn test_unavailable_cache_reports_errors() {
    let cache = MockCacheService::new();
    cache.set_unavailable(true);

    assert!(cache.get("anything").await.is_err());
    assert!(cache.cache_order(&order("CN1")).await.is_err());
    assert!(cache.delete("anything").await.is_err());
}
