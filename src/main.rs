use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tracing::info;

use agri_market::app_system::{setup_tracing, MarketSystem};
use agri_market::config::Config;
use agri_market::http::router;

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env is fine, the process environment still applies
    let _ = dotenvy::dotenv();
    let config = Config::load().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(config.log_format);
    info!(?config, "Starting agri-market");

    let system = MarketSystem::new(config.actor_buffer);
    let app = router(system.clients.clone(), &config);

    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| format!("Failed to bind {address}: {e}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    // The router and its client clones are gone; the actors can drain
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
