use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};
use crate::infrastructure::http::build_client;
use crate::infrastructure::sources::CatalogLocation;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub gutenberg_url: String,
    pub ncert_location: CatalogLocation,
    pub open_browser: bool,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    if let CatalogLocation::File(path) = &config.ncert_location
        && !path.exists()
    {
        warn!(path = %path.display(), "NCERT dataset not found; NCERT searches will fail");
    }

    let state = AppState::from_config(AppStateConfig {
        http_client: build_client()?,
        gutenberg_url: config.gutenberg_url.clone(),
        ncert_location: config.ncert_location.clone(),
    });

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        gutenberg = %config.gutenberg_url,
        ncert = %config.ncert_location,
        "starting HTTP server"
    );

    if config.open_browser {
        let url = format!("http://{}", config.bind_address);
        if let Err(err) = open::that(&url) {
            warn!(url, error = %err, "failed to open browser");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
