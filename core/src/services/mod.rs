//! Business services containing domain logic and use cases.

pub mod auth;
pub mod cache;
pub mod order;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, LoginCredentials};
pub use cache::{CacheServiceTrait, MockCacheService};
pub use order::{OrderService, OrderServiceConfig};
pub use session::SessionGate;
pub use token::{TokenService, TokenServiceConfig};
