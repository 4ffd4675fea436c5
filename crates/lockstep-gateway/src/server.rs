//! Server lifecycle: bind, serve, graceful shutdown.

use std::future::Future;

use tokio::net::TcpListener;

use lockstep_core::error::{LockstepError, Result};

use crate::{app_state::AppState, config::GatewayConfig, router};

/// Bind `cfg.listen` and serve until Ctrl-C or SIGTERM.
pub async fn run(cfg: GatewayConfig) -> Result<()> {
    let listen = cfg.listen_addr()?;
    let state = AppState::new(cfg)?;

    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| LockstepError::Bind(format!("{listen}: {e}")))?;

    tracing::info!(%listen, work_ms = state.cfg().work.duration_ms, "lockstep-gateway starting");
    serve(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
/// In-flight requests are allowed to finish.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router::build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| LockstepError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
