//! Application builder and server loop.

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use dreamjob_core::error::{AppError, ErrorKind};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM.
///
/// After the signal, in-flight requests get `server.shutdown_grace_seconds`
/// to finish before the server is abandoned.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let grace = Duration::from_secs(state.config.server.shutdown_grace_seconds);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Startup, format!("Failed to bind {addr}"), e)
    })?;

    info!(addr = %addr, "DreamJob server listening");

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, build_app(state))
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = signalled_tx.send(());
            })
            .await
    });

    // Errors here only mean the server stopped before any signal arrived.
    let _ = signalled_rx.await;

    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => {
            info!("Server stopped");
            Ok(())
        }
        Ok(Ok(Err(e))) => Err(AppError::with_source(ErrorKind::Internal, "Server error", e)),
        Ok(Err(e)) => Err(AppError::with_source(ErrorKind::Internal, "Server task failed", e)),
        Err(_) => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed");
            Ok(())
        }
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
    info!("Shutdown signal received");
}
