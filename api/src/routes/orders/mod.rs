//! Order route handlers, all behind the bearer token gate

pub mod cancel;
pub mod create;
pub mod list;

pub use cancel::cancel_order;
pub use create::create_order;
pub use list::list_orders;
