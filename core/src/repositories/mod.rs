//! Repository interfaces for persistence, plus in-memory implementations
//! used by tests and local development.

pub mod order;
pub mod token;
pub mod user;

pub use order::{MockOrderRepository, OrderRepository};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
