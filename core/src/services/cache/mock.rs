//! In-memory cache used by unit tests and the API test harness

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::entities::order::Order;

use super::keys::{order_fields, order_key, ORDERS_INDEX};
use super::traits::CacheServiceTrait;

#[derive(Default)]
struct Store {
    strings: HashMap<String, (String, Instant)>,
    hashes: HashMap<String, HashMap<String, String>>,
    index: HashMap<String, Vec<(i64, String)>>,
}

/// Mock cache service with TTL support and failure injection
#[derive(Clone, Default)]
pub struct MockCacheService {
    store: Arc<RwLock<Store>>,
    unavailable: Arc<AtomicBool>,
}

impl MockCacheService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the cache server were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Whether an unexpired string key exists
    pub async fn contains(&self, key: &str) -> bool {
        let store = self.store.read().await;
        store
            .strings
            .get(key)
            .map_or(false, |(_, expires_at)| *expires_at > Instant::now())
    }

    /// Fields of a mirrored hash
    pub async fn hash(&self, key: &str) -> Option<HashMap<String, String>> {
        self.store.read().await.hashes.get(key).cloned()
    }

    /// Members of the order index, oldest first
    pub async fn indexed_orders(&self) -> Vec<String> {
        let store = self.store.read().await;
        let mut members = store.index.get(ORDERS_INDEX).cloned().unwrap_or_default();
        members.sort();
        members.into_iter().map(|(_, member)| member).collect()
    }

    fn check_available(&self) -> Result<(), String> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err("cache unavailable".to_string());
        }
        Ok(())
    }
}

#[async_trait]
impl CacheServiceTrait for MockCacheService {
    async fn cache_order(&self, order: &Order) -> Result<(), String> {
        self.check_available()?;
        let mut store = self.store.write().await;

        let fields = order_fields(order)
            .into_iter()
            .map(|(field, value)| (field.to_string(), value))
            .collect();
        store.hashes.insert(order_key(&order.consignment_id), fields);

        let index = store.index.entry(ORDERS_INDEX.to_string()).or_default();
        index.retain(|(_, member)| member != &order.consignment_id);
        index.push((order.created_at.timestamp(), order.consignment_id.clone()));
        Ok(())
    }

    async fn evict_order(&self, consignment_id: &str) -> Result<(), String> {
        self.check_available()?;
        let mut store = self.store.write().await;
        store.hashes.remove(&order_key(consignment_id));
        if let Some(index) = store.index.get_mut(ORDERS_INDEX) {
            index.retain(|(_, member)| member != consignment_id);
        }
        Ok(())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.check_available()?;
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.store
            .write()
            .await
            .strings
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.check_available()?;
        let store = self.store.read().await;
        Ok(store
            .strings
            .get(key)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(value, _)| value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.check_available()?;
        let mut store = self.store.write().await;
        store.strings.remove(key);
        store.hashes.remove(key);
        store.index.remove(key);
        Ok(())
    }
}
