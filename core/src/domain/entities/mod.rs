//! Domain entities representing core business objects.

pub mod order;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use order::{DeliveryType, FeeBreakdown, ItemType, Order, OrderDraft, OrderStatus};
pub use token::{
    Claims, SignedToken, StoredToken, TokenKind, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_SECONDS,
};
pub use user::User;
