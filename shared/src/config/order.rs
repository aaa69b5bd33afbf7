//! Order intake configuration

use serde::{Deserialize, Serialize};

/// Business settings for order creation and listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConfig {
    /// Prefix placed in front of every consignment id
    pub consignment_prefix: String,

    /// City code that gets the discounted base delivery fee
    pub home_city: i64,

    /// Page size used when the client sends none (or zero)
    pub default_page_size: u32,

    /// Upper bound for client supplied page sizes
    pub max_page_size: u32,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            consignment_prefix: String::from("CN"),
            home_city: 1,
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}
