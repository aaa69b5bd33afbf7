//! Token service module for JWT management
//!
//! This module handles token-related operations:
//! - HS256 access and refresh token signing
//! - Token verification with algorithm pinning

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
