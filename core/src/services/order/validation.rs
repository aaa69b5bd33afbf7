//! Order draft validation
//!
//! Every failing rule is collected so the client sees all problems at once.

use order_shared::phone::is_valid_mobile;
use order_shared::validation::{validators::not_blank, ValidationErrors};

use crate::domain::entities::order::{DeliveryType, ItemType, OrderDraft};
use crate::errors::DomainError;

pub fn validate_draft(draft: &OrderDraft) -> Result<(), DomainError> {
    let mut errors = ValidationErrors::new();

    if draft.store_id <= 0 {
        errors.add("store_id", "The store field is required.");
        errors.add("store_id", "Wrong Store selected.");
    }

    errors.check(
        !not_blank(&draft.recipient_name),
        "recipient_name",
        "The recipient name field is required.",
    );

    if !not_blank(&draft.recipient_phone) {
        errors.add("recipient_phone", "The recipient phone field is required.");
    } else if !is_valid_mobile(&draft.recipient_phone) {
        errors.add("recipient_phone", "The recipient phone must be a valid mobile number.");
    }

    errors.check(
        !not_blank(&draft.recipient_address),
        "recipient_address",
        "The recipient address field is required.",
    );
    errors.check(
        draft.amount_to_collect <= 0.0,
        "amount_to_collect",
        "The amount to collect field is required.",
    );
    errors.check(
        draft.item_quantity <= 0,
        "item_quantity",
        "The item quantity field is required.",
    );
    errors.check(
        draft.item_weight <= 0.0,
        "item_weight",
        "The item weight field is required.",
    );

    if let Some(code) = draft.delivery_type {
        errors.check(
            DeliveryType::from_code(code).is_none(),
            "delivery_type",
            "The selected delivery type is invalid.",
        );
    }
    if let Some(code) = draft.item_type {
        errors.check(
            ItemType::from_code(code).is_none(),
            "item_type",
            "The selected item type is invalid.",
        );
    }

    errors
        .into_result()
        .map_err(|errors| DomainError::Validation { errors })
}
