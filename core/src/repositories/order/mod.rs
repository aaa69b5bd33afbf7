pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use r#trait::OrderRepository;
pub use mock::MockOrderRepository;
