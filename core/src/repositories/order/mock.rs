//! In-memory implementation of OrderRepository for tests and local runs

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::order::Order;
use crate::domain::value_objects::OrderFilter;
use crate::errors::DomainError;

use super::trait_::OrderRepository;

/// Mock order repository backed by a vector
#[derive(Clone, Default)]
pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    next_id: Arc<AtomicI64>,
    unavailable: Arc<AtomicBool>,
    colliding_inserts: Arc<AtomicU32>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with a persistence error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Reject the next `count` inserts as consignment id collisions
    pub fn collide_next_inserts(&self, count: u32) {
        self.colliding_inserts.store(count, Ordering::SeqCst);
    }

    /// Every stored row, including soft-deleted ones
    pub async fn all_rows(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("order store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn create(&self, mut order: Order) -> Result<Order, DomainError> {
        self.check_available()?;
        let mut orders = self.orders.write().await;

        let forced = self
            .colliding_inserts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if forced || orders.iter().any(|o| o.consignment_id == order.consignment_id) {
            return Err(DomainError::conflict(format!(
                "consignment id {}",
                order.consignment_id
            )));
        }

        order.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        orders.push(order.clone());
        Ok(order)
    }

    async fn find_all(&self, filter: &OrderFilter) -> Result<(Vec<Order>, u64), DomainError> {
        self.check_available()?;
        let orders = self.orders.read().await;

        let mut matching: Vec<&Order> = orders.iter().filter(|o| filter.matches(o)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit() as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn soft_delete(&self, consignment_id: &str, user_id: i64) -> Result<u64, DomainError> {
        self.check_available()?;
        let mut orders = self.orders.write().await;
        let now = Utc::now();

        let mut affected = 0;
        for order in orders
            .iter_mut()
            .filter(|o| o.consignment_id == consignment_id && o.user_id == user_id && !o.is_deleted())
        {
            order.deleted_at = Some(now);
            order.updated_at = now;
            affected += 1;
        }
        Ok(affected)
    }
}
