//! Top-level facade crate for lockstep.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use lockstep_core::*;
}

pub mod gateway {
    pub use lockstep_gateway::*;
}
