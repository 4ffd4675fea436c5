//! lockstep core: transport-agnostic wire model and error types.
//!
//! This crate defines the response contract and error surface shared by the
//! gateway and any client tooling. It carries no runtime or HTTP dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{LockstepError, Result};
