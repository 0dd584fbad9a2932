use std::error::Error;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tracing::info;

use server::bootstrap::router::create_router;
use server::bootstrap::state::AppState;
use server::config_loader;
use server::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;
    observability::tracing::setup_logging(&config)?;

    info!("PicTrim server starting");
    observability::startup_info::announce(&config);

    let address = config.server_address();
    let state = AppState::new(config);
    let app = create_router(state).into_make_service_with_connect_info::<SocketAddr>();

    let listener = TcpListener::bind(&address).await?;
    info!("Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sig) => sig,
        Err(e) => {
            tracing::error!("Failed to install SIGTERM handler: {e}");
            return;
        }
    };

    tokio::select! {
        _ = ctrl_c() => info!("Received Ctrl+C, shutting down"),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
    }
}
