//! Authentication service module
//!
//! - Credential checks against bcrypt hashes
//! - Token pair issuance, persistence and cache mirroring
//! - Logout with store revocation and cache invalidation

mod config;
pub mod password;
mod service;


pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::{AuthService, LoginCredentials};
