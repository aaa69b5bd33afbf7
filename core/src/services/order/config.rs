//! Configuration for the order service

use order_shared::config::OrderConfig;
use order_shared::types::pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Configuration for the order service
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    /// Leading characters of every consignment id
    pub consignment_prefix: String,
    /// City code that gets the lower base delivery fee
    pub home_city: i64,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            consignment_prefix: "CN".to_string(),
            home_city: 1,
            default_page_size: DEFAULT_PER_PAGE,
            max_page_size: MAX_PER_PAGE,
        }
    }
}

impl From<&OrderConfig> for OrderServiceConfig {
    fn from(config: &OrderConfig) -> Self {
        Self {
            consignment_prefix: config.consignment_prefix.clone(),
            home_city: config.home_city,
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }
}
