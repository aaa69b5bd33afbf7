//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response envelopes

pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use pagination::Pagination;
pub use response::{ApiResponse, ErrorResponse, FieldErrors, ResponseType};
