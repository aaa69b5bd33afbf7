//! Authentication route handlers
//!
//! - Login with user name or email plus password
//! - Logout of the caller's current session

pub mod login;
pub mod logout;

pub use login::login;
pub use logout::logout;
