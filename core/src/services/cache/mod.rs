//! Cache mirror abstraction
//!
//! The cache is a best-effort accelerator: every caller logs and swallows
//! failures, so the trait reports them as plain strings.

pub mod keys;
mod mock;
mod traits;

#[cfg(test)]
mod tests;

pub use mock::MockCacheService;
pub use traits::CacheServiceTrait;
