//! Common validation utilities

use crate::types::response::FieldErrors;

/// Collects field-level validation messages, preserving insertion order per field
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push((field.into(), message.into()));
    }

    /// Add `message` for `field` when `failed` holds
    pub fn check(&mut self, failed: bool, field: &str, message: &str) {
        if failed {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn to_field_errors(&self) -> FieldErrors {
        let mut field_errors = FieldErrors::new();
        for (field, message) in &self.errors {
            field_errors
                .entry(field.clone())
                .or_default()
                .push(message.clone());
        }
        field_errors
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_field_errors())
        }
    }
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not blank
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if an email address looks valid (basic check)
    pub fn is_valid_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_messages_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("store_id", "The store field is required.");
        errors.add("store_id", "Wrong Store selected.");
        errors.check(true, "recipient_name", "The recipient name field is required.");
        errors.check(false, "recipient_phone", "never added");

        let fields = errors.to_field_errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            fields["store_id"],
            vec!["The store field is required.", "Wrong Store selected."]
        );
        assert!(!fields.contains_key("recipient_phone"));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("item_weight", "The item weight field is required.");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_validators() {
        assert!(validators::not_blank(" a "));
        assert!(!validators::not_blank("   "));
        assert!(validators::is_valid_email("ops@courier.test"));
        assert!(!validators::is_valid_email("ops.courier.test"));
    }
}
