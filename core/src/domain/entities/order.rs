//! Order entity and its enumerations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// How the parcel reaches the recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryType {
    Unknown,
    Pickup,
    #[default]
    Delivery,
}

impl DeliveryType {
    pub fn code(&self) -> i64 {
        match self {
            DeliveryType::Unknown => 0,
            DeliveryType::Pickup => 1,
            DeliveryType::Delivery => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(DeliveryType::Unknown),
            1 => Some(DeliveryType::Pickup),
            2 => Some(DeliveryType::Delivery),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Unknown => "Unknown",
            DeliveryType::Pickup => "Pickup",
            DeliveryType::Delivery => "Delivery",
        }
    }
}

/// What is being shipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ItemType {
    Unknown,
    Document,
    #[default]
    Parcel,
    Other,
}

impl ItemType {
    pub fn code(&self) -> i64 {
        match self {
            ItemType::Unknown => 0,
            ItemType::Document => 1,
            ItemType::Parcel => 2,
            ItemType::Other => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ItemType::Unknown),
            1 => Some(ItemType::Document),
            2 => Some(ItemType::Parcel),
            3 => Some(ItemType::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Unknown => "Unknown",
            ItemType::Document => "Document",
            ItemType::Parcel => "Parcel",
            ItemType::Other => "Other",
        }
    }
}

/// Caller supplied data for a new order.
///
/// Fees, status and the consignment id are not part of the draft; the order
/// service derives them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDraft {
    pub store_id: i64,
    pub merchant_order_id: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: i64,
    /// Raw delivery type code, `None` for the server default
    pub delivery_type: Option<i64>,
    /// Raw item type code, `None` for the server default
    pub item_type: Option<i64>,
    pub special_instruction: Option<String>,
    pub item_description: Option<String>,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub amount_to_collect: f64,
}

/// Fees derived from weight, destination city and collection amount
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub delivery_fee: f64,
    pub cod_fee: f64,
    pub total_fee: f64,
}

/// A persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned primary key (0 until inserted)
    pub id: i64,
    pub store_id: i64,
    pub merchant_order_id: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: i64,
    pub delivery_type: DeliveryType,
    pub item_type: ItemType,
    pub special_instruction: Option<String>,
    pub item_description: Option<String>,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub amount_to_collect: f64,
    pub consignment_id: String,
    pub fees: FeeBreakdown,
    pub promo_discount: f64,
    pub discount: f64,
    pub order_status: OrderStatus,
    pub archived: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Build an unsaved order from a validated draft
    pub fn from_draft(
        draft: OrderDraft,
        user_id: i64,
        consignment_id: String,
        fees: FeeBreakdown,
        delivery_type: DeliveryType,
        item_type: ItemType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            store_id: draft.store_id,
            merchant_order_id: draft.merchant_order_id,
            recipient_name: draft.recipient_name,
            recipient_phone: draft.recipient_phone,
            recipient_address: draft.recipient_address,
            recipient_city: draft.recipient_city,
            recipient_zone: draft.recipient_zone,
            recipient_area: draft.recipient_area,
            delivery_type,
            item_type,
            special_instruction: draft.special_instruction,
            item_description: draft.item_description,
            item_quantity: draft.item_quantity,
            item_weight: draft.item_weight,
            amount_to_collect: draft.amount_to_collect,
            consignment_id,
            fees,
            promo_discount: 0.0,
            discount: 0.0,
            order_status: OrderStatus::Pending,
            archived: false,
            user_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
