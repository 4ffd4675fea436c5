use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Response body of one serialized unit of work: `{"elapsed": <seconds>}`.
///
/// `elapsed` covers the whole call, including time spent queued behind other
/// holders of the lock. It is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    pub elapsed: f64,
}

impl TimingResult {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            elapsed: d.as_secs_f64(),
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed.max(0.0))
    }
}
