/**
 * Gatehouse Server Entry Point
 *
 * Loads configuration, installs tracing, serves the Axum app and closes
 * the database handle after a graceful shutdown.
 */

use gatehouse::backend::server::{config::ServerConfig, init::{create_app, shutdown_signal}};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env()?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let (app, state) = create_app(config).await;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}
