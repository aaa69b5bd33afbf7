//! API response envelopes
//!
//! Every endpoint answers with one of two shapes:
//!
//! ```json
//! { "message": "...", "type": "success", "code": "200", "data": { ... } }
//! { "message": "...", "type": "error",   "code": "422", "errors": { "field": ["..."] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name to human readable messages
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Discriminator carried in the `type` field of every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
}

/// Successful response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,

    #[serde(rename = "type")]
    pub kind: ResponseType,

    /// HTTP status code rendered as a string
    pub code: String,

    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response for the given status code
    pub fn success(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            kind: ResponseType::Success,
            code: status.to_string(),
            data,
        }
    }
}

/// Error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(rename = "type")]
    pub kind: ResponseType,

    /// HTTP status code rendered as a string
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    /// Create an error response without field details
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ResponseType::Error,
            code: status.to_string(),
            errors: None,
        }
    }

    /// Attach field-level errors
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Attach a single field error, appending to any existing messages
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(HashMap::new)
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let response = ApiResponse::success(201, "Order Created Successfully", json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["type"], "success");
        assert_eq!(value["code"], "201");
        assert_eq!(value["message"], "Order Created Successfully");
        assert_eq!(value["data"]["id"], 1);
    }

    #[test]
    fn test_error_shape_omits_empty_errors() {
        let value = serde_json::to_value(ErrorResponse::new(401, "Unauthorized")).unwrap();

        assert_eq!(value["type"], "error");
        assert_eq!(value["code"], "401");
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_field_errors_accumulate() {
        let response = ErrorResponse::new(422, "Please fix the given errors")
            .with_field_error("store_id", "The store field is required.")
            .with_field_error("store_id", "Wrong Store selected.");

        let errors = response.errors.unwrap();
        assert_eq!(errors["store_id"].len(), 2);
    }
}
