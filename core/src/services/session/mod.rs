//! Request gate: decides whether a bearer token may pass.

mod gate;


pub use gate::SessionGate;
