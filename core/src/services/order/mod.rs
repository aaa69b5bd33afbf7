//! Order service module
//!
//! - Fee calculation from weight, destination city and collection amount
//! - Consignment id generation
//! - Order creation, cancellation and paginated listing

mod config;
pub mod consignment;
pub mod fees;
mod service;
mod validation;


pub use config::OrderServiceConfig;
pub use consignment::generate_consignment_id;
pub use fees::calculate_fees;
pub use service::OrderService;
pub use validation::validate_draft;
