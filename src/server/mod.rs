//! HTTP surface of the service.
//!
//! ```text
//! GET /                  HTML page with the league dropdown
//! GET /api/standings     ?league=<name>  -> {"standings": [...]}
//! GET /api/scorers       ?league=<name>  -> {"scorers": [...]}
//! GET /api/leagues       configured leagues
//! GET /health            liveness check
//! ```

pub mod error;
pub mod handlers;
pub mod index;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::error::AppError;
use axum::Router;
use axum::routing::get;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Builds the router with every route bound to the shared state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/standings", get(handlers::standings))
        .route("/api/scorers", get(handlers::scorers))
        .route("/api/leagues", get(handlers::leagues))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Serves until Ctrl-C or SIGTERM is received.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    serve_until(listener, state, shutdown_signal()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve_until<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Listening on http://{addr}");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
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
