//! Main order service implementation

use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;

use order_shared::types::Pagination;

use crate::domain::entities::order::{DeliveryType, ItemType, Order, OrderDraft, OrderStatus};
use crate::domain::value_objects::{CreatedOrder, OrderFilter, OrderListParams, OrderPage};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::OrderRepository;
use crate::services::cache::CacheServiceTrait;

use super::config::OrderServiceConfig;
use super::consignment::generate_consignment_id;
use super::fees::calculate_fees;
use super::validation::validate_draft;

/// Fresh consignment ids tried before a collision is reported
const CONSIGNMENT_ATTEMPTS: usize = 3;

/// Order service mediating between the order store and the cache mirror
pub struct OrderService<O, C>
where
    O: OrderRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    /// Authoritative order storage
    order_repository: Arc<O>,
    /// Best-effort mirror of created orders
    cache: Arc<C>,
    config: OrderServiceConfig,
}

impl<O, C> OrderService<O, C>
where
    O: OrderRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    pub fn new(order_repository: Arc<O>, cache: Arc<C>, config: OrderServiceConfig) -> Self {
        Self {
            order_repository,
            cache,
            config,
        }
    }

    /// Create an order for `user_id`
    ///
    /// Validates the draft, derives fees and the consignment id, inserts the
    /// order and mirrors it into the cache. A consignment id collision is
    /// retried with a new id. A failed cache write is logged and does not
    /// fail the request.
    ///
    /// # Returns
    ///
    /// * `Ok(CreatedOrder)` - Summary of the stored order
    /// * `Err(DomainError::Validation)` - Draft breaks one or more rules
    /// * `Err(DomainError::Conflict)` - Every generated consignment id was taken
    /// * `Err(DomainError::Persistence)` - Store write failed
    pub async fn create_order(&self, draft: OrderDraft, user_id: i64) -> DomainResult<CreatedOrder> {
        validate_draft(&draft)?;

        let delivery_type = draft
            .delivery_type
            .and_then(DeliveryType::from_code)
            .unwrap_or_default();
        let item_type = draft
            .item_type
            .and_then(ItemType::from_code)
            .unwrap_or_default();
        let fees = calculate_fees(
            draft.item_weight,
            draft.recipient_city,
            draft.amount_to_collect,
            self.config.home_city,
        );
        let template = Order::from_draft(draft, user_id, String::new(), fees, delivery_type, item_type);
        let order = self.insert_with_fresh_id(template).await?;

        tracing::info!(
            consignment_id = %order.consignment_id,
            user_id = user_id,
            delivery_fee = order.fees.delivery_fee,
            "Order created"
        );

        if let Err(e) = self.cache.cache_order(&order).await {
            tracing::warn!(
                consignment_id = %order.consignment_id,
                error = %e,
                "Failed to mirror order into cache"
            );
        }

        Ok(CreatedOrder::from(&order))
    }

    async fn insert_with_fresh_id(&self, template: Order) -> DomainResult<Order> {
        let mut attempt = 1;
        loop {
            let mut order = template.clone();
            order.consignment_id = generate_consignment_id(&self.config.consignment_prefix, Utc::now());

            match self.order_repository.create(order).await {
                Err(DomainError::Conflict { resource }) if attempt < CONSIGNMENT_ATTEMPTS => {
                    tracing::warn!(attempt = attempt, resource = %resource, "Consignment id collision, regenerating");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// Soft-delete the caller's order with `consignment_id`
    ///
    /// The cache mirror is evicted whether or not a row matched.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Order cancelled
    /// * `Err(DomainError::NotFound)` - No live order with that id belongs to `user_id`
    /// * `Err(DomainError::Persistence)` - Store update failed
    pub async fn cancel_order(&self, consignment_id: &str, user_id: i64) -> DomainResult<()> {
        let affected = self
            .order_repository
            .soft_delete(consignment_id, user_id)
            .await?;

        if let Err(e) = self.cache.evict_order(consignment_id).await {
            tracing::warn!(
                consignment_id = %consignment_id,
                error = %e,
                "Failed to evict order from cache"
            );
        }

        if affected == 0 {
            tracing::debug!(consignment_id = %consignment_id, user_id = user_id, "Cancel matched no order");
            return Err(DomainError::not_found("order"));
        }

        tracing::info!(consignment_id = %consignment_id, user_id = user_id, "Order cancelled");
        Ok(())
    }

    /// List the caller's orders, newest first, one page at a time
    ///
    /// # Returns
    ///
    /// * `Ok(OrderPage)` - The page plus pagination metadata
    /// * `Err(DomainError::Validation)` - Unknown `transfer_status`
    /// * `Err(DomainError::Persistence)` - Store query failed
    pub async fn find_all_orders(
        &self,
        user_id: i64,
        params: OrderListParams,
    ) -> DomainResult<OrderPage> {
        let filter = self.build_filter(user_id, params)?;
        let (orders, total) = self.order_repository.find_all(&filter).await?;

        tracing::debug!(
            user_id = user_id,
            total = total,
            page = filter.pagination.page,
            "Orders fetched"
        );

        Ok(OrderPage::new(orders, total, &filter.pagination))
    }

    fn build_filter(&self, user_id: i64, params: OrderListParams) -> DomainResult<OrderFilter> {
        let pagination = Pagination::with_bounds(
            params.page,
            params.limit,
            self.config.default_page_size,
            self.config.max_page_size,
        );

        let transfer_status = match params.transfer_status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => Some(OrderStatus::from_str(label).map_err(|_| {
                DomainError::validation("transfer_status", "The selected transfer status is invalid.")
            })?),
        };

        let mut filter = OrderFilter::new(user_id, pagination);
        filter.transfer_status = transfer_status;
        filter.archived = params.archive.map(|flag| flag != 0);
        Ok(filter)
    }
}
