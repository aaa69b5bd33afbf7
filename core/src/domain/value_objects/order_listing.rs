//! Projections and query objects for order creation and listing.

use chrono::{DateTime, Utc};
use order_shared::types::Pagination;
use serde::{Deserialize, Serialize};

use crate::domain::entities::order::{Order, OrderStatus};

/// Result of a successful order creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub consignment_id: String,
    pub merchant_order_id: Option<String>,
    pub order_status: String,
    pub delivery_fee: f64,
}

impl From<&Order> for CreatedOrder {
    fn from(order: &Order) -> Self {
        Self {
            consignment_id: order.consignment_id.clone(),
            merchant_order_id: order.merchant_order_id.clone(),
            order_status: order.order_status.as_str().to_string(),
            delivery_fee: order.fees.delivery_fee,
        }
    }
}

/// Client-facing view of an order with enum codes rendered as labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub consignment_id: String,
    pub merchant_order_id: Option<String>,
    pub store_id: i64,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: i64,
    pub delivery_type: String,
    pub item_type: String,
    pub special_instruction: Option<String>,
    pub item_description: Option<String>,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub amount_to_collect: f64,
    pub order_status: String,
    pub archived: bool,
    pub delivery_fee: f64,
    pub cod_fee: f64,
    pub promo_discount: f64,
    pub discount: f64,
    pub total_fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            consignment_id: order.consignment_id,
            merchant_order_id: order.merchant_order_id,
            store_id: order.store_id,
            recipient_name: order.recipient_name,
            recipient_phone: order.recipient_phone,
            recipient_address: order.recipient_address,
            recipient_city: order.recipient_city,
            recipient_zone: order.recipient_zone,
            recipient_area: order.recipient_area,
            delivery_type: order.delivery_type.as_str().to_string(),
            item_type: order.item_type.as_str().to_string(),
            special_instruction: order.special_instruction,
            item_description: order.item_description,
            item_quantity: order.item_quantity,
            item_weight: order.item_weight,
            amount_to_collect: order.amount_to_collect,
            order_status: order.order_status.as_str().to_string(),
            archived: order.archived,
            delivery_fee: order.fees.delivery_fee,
            cod_fee: order.fees.cod_fee,
            promo_discount: order.promo_discount,
            discount: order.discount,
            total_fee: order.fees.total_fee,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Listing parameters as received from the client, before sanitizing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListParams {
    /// Status label, matched case-insensitively
    pub transfer_status: Option<String>,
    /// Non-zero selects archived orders, zero selects active ones
    pub archive: Option<i64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Listing query for one owner's orders
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFilter {
    pub user_id: i64,
    /// Only orders in this status
    pub transfer_status: Option<OrderStatus>,
    /// `Some(true)` archived only, `Some(false)` active only, `None` both
    pub archived: Option<bool>,
    pub pagination: Pagination,
}

impl OrderFilter {
    pub fn new(user_id: i64, pagination: Pagination) -> Self {
        Self {
            user_id,
            transfer_status: None,
            archived: None,
            pagination,
        }
    }

    /// Whether `order` satisfies every predicate except pagination
    pub fn matches(&self, order: &Order) -> bool {
        order.user_id == self.user_id
            && !order.is_deleted()
            && self.transfer_status.map_or(true, |s| order.order_status == s)
            && self.archived.map_or(true, |a| order.archived == a)
    }
}

/// One page of orders plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    pub orders: Vec<OrderSummary>,
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub total_in_page: usize,
    pub last_page: u32,
}

impl OrderPage {
    pub fn new(orders: Vec<Order>, total: u64, pagination: &Pagination) -> Self {
        let orders: Vec<OrderSummary> = orders.into_iter().map(OrderSummary::from).collect();
        Self {
            total_in_page: orders.len(),
            orders,
            total,
            current_page: pagination.current_page(),
            per_page: pagination.per_page,
            last_page: pagination.last_page(total),
        }
    }
}
