//! lockstep gateway
//!
//! - `GET /test` on 0.0.0.0:8000
//! - Concurrent callers are serialized behind one lock around a 3s unit of work
//! - No flags or config file; `RUST_LOG` only adjusts log output

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lockstep_gateway::{config::GatewayConfig, server};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = server::run(GatewayConfig::default()).await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "lockstep-gateway stopped");
        std::process::exit(1);
    }
}
