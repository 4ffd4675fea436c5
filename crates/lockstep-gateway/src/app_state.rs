//! Shared application state for the lockstep gateway.
//!
//! Owns the work lock. Each `AppState::new` creates its own lock, so separate
//! instances (e.g. in tests) never contend with each other.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::Instant;

use lockstep_core::error::Result;
use lockstep_core::protocol::TimingResult;

use crate::config::GatewayConfig;
use crate::work::{SimulatedWork, Workload};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    work_lock: Mutex<()>,
    workload: Arc<dyn Workload>,
}

impl AppState {
    /// Build state with the simulated workload described by `cfg.work`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let workload = Arc::new(SimulatedWork::new(cfg.work.duration()));
        Ok(Self::with_workload(cfg, workload))
    }

    pub fn with_workload(cfg: GatewayConfig, workload: Arc<dyn Workload>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                work_lock: Mutex::new(()),
                workload,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    /// Queue for the work lock, run the workload, and report the time spent
    /// from entry to release (queueing included).
    ///
    /// The guard is dropped on every path, including when the caller's future
    /// is dropped mid-wait.
    pub async fn run_exclusive(&self) -> TimingResult {
        let start = Instant::now();
        let work = self.inner.workload.name();
        tracing::debug!(work, "queued for work lock");

        {
            let _guard = self.inner.work_lock.lock().await;
            tracing::debug!(work, waited_ms = start.elapsed().as_millis() as u64, "work lock acquired");
            self.inner.workload.run().await;
        }

        TimingResult::from_duration(start.elapsed())
    }

    /// True when nobody holds the work lock.
    pub fn is_idle(&self) -> bool {
        self.inner.work_lock.try_lock().is_ok()
    }
}
