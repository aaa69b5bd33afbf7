//! MySQL repository implementations

mod order_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use order_repository_impl::MySqlOrderRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use order_core::errors::DomainError;

/// Convert a driver error into a persistence failure, logging the cause
pub(crate) fn persistence_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "{}", context);
    DomainError::persistence(format!("{}: {}", context, error))
}

/// Column read failure while mapping a row
pub(crate) fn column_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to get {}: {}", column, error),
    }
}
