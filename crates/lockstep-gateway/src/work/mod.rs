//! Units of work executed inside the exclusive section.
//!
//! The gateway holds exactly one `Workload` and runs it under the global work
//! lock. Production uses `SimulatedWork`; tests plug in probes.

pub mod simulated;

use async_trait::async_trait;

pub use simulated::SimulatedWork;

/// A unit of work run while the exclusive lock is held.
///
/// Implementations must suspend cooperatively (no thread-blocking calls), since
/// every queued request shares the runtime's worker threads.
#[async_trait]
pub trait Workload: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self);
}
