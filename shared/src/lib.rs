//! Shared utilities and common types for the courier order service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Response envelopes and pagination
//! - Utility functions (phone validation, field error collection)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    OrderConfig, ServerConfig,
};
pub use types::{ApiResponse, ErrorResponse, FieldErrors, Pagination};
pub use utils::{phone, validation};
