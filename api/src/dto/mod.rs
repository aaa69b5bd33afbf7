//! Request bodies and query strings accepted by the HTTP layer

pub mod auth;
pub mod order;

pub use auth::LoginRequest;
pub use order::{CreateOrderRequest, ListOrdersQuery};
