//! lockstep gateway library entry.
//!
//! Wires config, the shared work lock, and the single `/test` route into an
//! axum service. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod server;
pub mod transport;
pub mod work;
