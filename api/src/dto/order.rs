use serde::{Deserialize, Serialize};
use validator::Validate;

use order_core::domain::entities::OrderDraft;
use order_core::domain::value_objects::OrderListParams;

/// Body of `POST /api/v1/orders`
///
/// Missing fields deserialize to zero values so the order service can
/// report every business rule violation at once. The limits below only
/// guard column sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateOrderRequest {
    pub store_id: i64,

    #[validate(length(max = 100, message = "The merchant order id may not be greater than 100 characters."))]
    pub merchant_order_id: Option<String>,

    #[validate(length(max = 255, message = "The recipient name may not be greater than 255 characters."))]
    pub recipient_name: String,

    #[validate(length(max = 20, message = "The recipient phone may not be greater than 20 characters."))]
    pub recipient_phone: String,

    #[validate(length(max = 500, message = "The recipient address may not be greater than 500 characters."))]
    pub recipient_address: String,

    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: i64,
    pub delivery_type: Option<i64>,
    pub item_type: Option<i64>,

    #[validate(length(max = 500, message = "The special instruction may not be greater than 500 characters."))]
    pub special_instruction: Option<String>,

    #[validate(length(max = 500, message = "The item description may not be greater than 500 characters."))]
    pub item_description: Option<String>,

    pub item_quantity: i32,
    pub item_weight: f64,
    pub amount_to_collect: f64,
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            store_id: request.store_id,
            merchant_order_id: request.merchant_order_id,
            recipient_name: request.recipient_name,
            recipient_phone: request.recipient_phone,
            recipient_address: request.recipient_address,
            recipient_city: request.recipient_city,
            recipient_zone: request.recipient_zone,
            recipient_area: request.recipient_area,
            delivery_type: request.delivery_type,
            item_type: request.item_type,
            special_instruction: request.special_instruction,
            item_description: request.item_description,
            item_quantity: request.item_quantity,
            item_weight: request.item_weight,
            amount_to_collect: request.amount_to_collect,
        }
    }
}

/// Query string of `GET /api/v1/orders/all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrdersQuery {
    pub transfer_status: Option<String>,
    pub archive: Option<i64>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ListOrdersQuery> for OrderListParams {
    fn from(query: ListOrdersQuery) -> Self {
        Self {
            transfer_status: query.transfer_status.filter(|s| !s.trim().is_empty()),
            archive: query.archive,
            page: query.page,
            limit: query.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let request: CreateOrderRequest = serde_json::from_str(r#"{"recipient_name":"Karim"}"#).unwrap();
        assert_eq!(request.store_id, 0);
        assert_eq!(request.item_quantity, 0);
        assert!(request.delivery_type.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_oversized_address_rejected() {
        let request = CreateOrderRequest {
            recipient_address: "x".repeat(501),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("recipient_address"));
    }

    #[test]
    fn test_blank_transfer_status_is_dropped() {
        let params: OrderListParams = ListOrdersQuery {
            transfer_status: Some(" ".to_string()),
            ..Default::default()
        }
        .into();
        assert!(params.transfer_status.is_none());
    }
}
