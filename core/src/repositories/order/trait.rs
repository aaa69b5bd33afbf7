//! Order repository trait defining the interface for order persistence.

use async_trait::async_trait;

use crate::domain::entities::order::Order;
use crate::domain::value_objects::OrderFilter;
use crate::errors::DomainError;

/// Repository trait for Order entity persistence operations
///
/// Orders are never physically removed; cancellation sets `deleted_at` and
/// every read ignores rows where it is set.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order
    ///
    /// # Returns
    /// * `Ok(Order)` - The saved order with its store-assigned id
    /// * `Err(DomainError::Conflict)` - The consignment id is already taken
    /// * `Err(DomainError::Persistence)` - Insert failed
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// One page of live orders matching the filter, newest first, plus the
    /// total number of matching rows
    async fn find_all(&self, filter: &OrderFilter) -> Result<(Vec<Order>, u64), DomainError>;

    /// Soft delete the owner's live order
    ///
    /// # Returns
    /// * `Ok(n)` - Number of rows affected (0 when nothing matched)
    async fn soft_delete(&self, consignment_id: &str, user_id: i64) -> Result<u64, DomainError>;
}
