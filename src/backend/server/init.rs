/**
 * Server Initialization
 *
 * Builds the application state from configuration and assembles the router.
 * No connection is opened here; the database handle connects on the first
 * request that needs it.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// The returned `AppState` is kept by the caller so it can be torn down
/// with [`AppState::shutdown`] once the server stops.
pub async fn create_app(config: ServerConfig) -> (Router<()>, AppState) {
    tracing::info!("Initializing Gatehouse backend server");
    tracing::debug!("Configuration: {:?}", config);

    let app_state = AppState::from_config(config);
    let app = create_router(app_state.clone());

    tracing::info!("Router configured");

    (app, app_state)
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
