//! Cache key layout shared by every cache backend.

use crate::domain::entities::order::Order;
use crate::domain::entities::token::TokenKind;

/// Sorted set of consignment ids scored by creation time (unix seconds)
pub const ORDERS_INDEX: &str = "orders";

pub fn order_key(consignment_id: &str) -> String {
    format!("order:{}", consignment_id)
}

/// `access_token:<token>` or `refresh_token:<token>`
pub fn token_key(kind: TokenKind, token: &str) -> String {
    format!("{}:{}", kind.as_str(), token)
}

pub fn session_key(user_id: i64) -> String {
    format!("session:{}", user_id)
}

/// Hash fields written for an order mirror
pub fn order_fields(order: &Order) -> Vec<(&'static str, String)> {
    vec![
        ("consignment_id", order.consignment_id.clone()),
        (
            "merchant_order_id",
            order.merchant_order_id.clone().unwrap_or_default(),
        ),
        ("order_status", order.order_status.as_str().to_string()),
        ("delivery_fee", order.fees.delivery_fee.to_string()),
        ("created_at", order.created_at.to_rfc3339()),
        ("updated_at", order.updated_at.to_rfc3339()),
    ]
}
