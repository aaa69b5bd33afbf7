//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use order_shared::types::FieldErrors;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Client-correctable input problems, keyed by field
    #[error("Validation error: {}", summarize(errors))]
    Validation { errors: FieldErrors },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// A unique key was already taken
    #[error("Conflict: {resource} already exists")]
    Conflict { resource: String },

    /// The persistent store rejected or failed a query
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Single-field validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        DomainError::Validation { errors }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        DomainError::Persistence {
            message: message.into(),
        }
    }

    pub fn conflict(resource: impl Into<String>) -> Self {
        DomainError::Conflict {
            resource: resource.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// True for every failure that should end in a 401 at the HTTP boundary
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            DomainError::Unauthorized | DomainError::Auth(_) => true,
            DomainError::Token(e) => e.is_client_error(),
            _ => false,
        }
    }
}

fn summarize(errors: &FieldErrors) -> String {
    let mut fields: Vec<&str> = errors.keys().map(String::as_str).collect();
    fields.sort_unstable();
    fields.join(", ")
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
