use std::time::Duration;

use async_trait::async_trait;

use crate::work::Workload;

/// Fixed-duration async sleep standing in for blocking work.
pub struct SimulatedWork {
    duration: Duration,
}

impl SimulatedWork {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl Workload for SimulatedWork {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn run(&self) {
        tokio::time::sleep(self.duration).await;
    }
}
