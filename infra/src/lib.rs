//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `order_core`,
//! following Clean Architecture principles.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool, migrations and repositories using SQLx
//! - **Cache**: Redis client with retry logic and the order/token cache mirror

// Re-export core types for convenience
pub use order_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and cache mirror
pub mod cache;

/// Configuration types consumed by this crate
pub mod config {
    pub use order_shared::config::{CacheConfig, DatabaseConfig};
}

/// Infrastructure-specific error types
///
/// Only raised while wiring the application up; request-time failures are
/// converted into `DomainError` at the repository boundary.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
