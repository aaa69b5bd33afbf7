//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod order_listing;

// Re-export commonly used types
pub use auth_response::LoginResponse;
pub use order_listing::{CreatedOrder, OrderFilter, OrderListParams, OrderPage, OrderSummary};
