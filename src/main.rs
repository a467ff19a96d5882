//! Nutriscore
//!
//! HTTP server for food nutrition scoring.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use nutriscore::config::ServerConfig;
use nutriscore::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutriscore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting nutriscore");

    let config = ServerConfig::from_env()?;
    let app = http::router(&config);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        cors = %config.cors_allowed_origins,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
