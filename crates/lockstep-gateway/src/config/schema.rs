use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use lockstep_core::error::{LockstepError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub work: WorkSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            work: WorkSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.work.validate()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| LockstepError::BadRequest(format!("listen must be a valid SocketAddr: {e}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkSection {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Default for WorkSection {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl WorkSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=60_000).contains(&self.duration_ms) {
            return Err(LockstepError::BadRequest(
                "work.duration_ms must be between 1 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_duration_ms() -> u64 {
    3000
}
