//! # Order Core
//!
//! Core business logic and domain layer for the courier order service.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that the infrastructure and API crates build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Order, OrderDraft, StoredToken, TokenKind, User};
pub use domain::value_objects::{CreatedOrder, LoginResponse, OrderListParams, OrderPage};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{OrderRepository, TokenRepository, UserRepository};
pub use services::{AuthService, CacheServiceTrait, OrderService, SessionGate, TokenService};
