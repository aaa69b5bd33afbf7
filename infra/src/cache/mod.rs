//! Cache module for Redis-based caching
//!
//! This module provides the Redis client with retry logic and the cache
//! mirror used by the order and auth services.

pub mod redis_cache;
pub mod redis_client;


pub use redis_cache::RedisCache;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use order_shared::config::CacheConfig;
