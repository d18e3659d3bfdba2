//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use hrportal_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Serves `state` on `listener` until Ctrl-C or SIGTERM, then closes every
/// real-time listener.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let bus = state.bus.clone();
    let app = build_app(state);

    if let Ok(addr) = listener.local_addr() {
        info!("HR portal listening on {}", addr);
    }

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("Shutdown signal received");
            bus.close_all();
        })
        .await;

    result.map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
}
