//! buffer/mod.rs
//! Destination buffers and the per-call buffer policy.

pub mod policy;
pub mod types;

pub use policy::*;
pub use types::*;
