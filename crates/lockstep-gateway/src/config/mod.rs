//! Gateway config (strict parsing).
//!
//! The binary runs on `GatewayConfig::default()`. The loader exists for
//! embedders and tests that need independent instances.

pub mod schema;

use lockstep_core::error::{LockstepError, Result};

pub use schema::{GatewayConfig, WorkSection};

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| LockstepError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
