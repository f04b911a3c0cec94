//! Listener lifecycle: bind, serve, graceful shutdown.

use std::future::Future;

use hashd_core::error::{HashdError, Result};

use crate::{app_state::AppState, router};

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run<F>(state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.cfg().listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HashdError::Bind { addr, source })?;

    tracing::info!(
        %addr,
        timeout_secs = state.cfg().timeout.as_secs(),
        max_header_bytes = state.cfg().max_header_bytes,
        "hashd listening"
    );

    let app = router::build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
