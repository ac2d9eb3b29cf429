use anyhow::{Context, Result};
use reelscript::{
    app,
    app_state::AppState,
    config::{Config, LogFormat},
    telemetry,
};
use std::path::Path;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing(LogFormat::Text);
            error!(error = %e, "refusing to start without a valid configuration");
            return Err(e.into());
        }
    };
    telemetry::init_tracing(config.log_format());
    info!(?config, "configuration loaded");

    let state = AppState::from_config(&config)?;
    let app = app::router(state, Some(Path::new(config.static_dir())));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, shutting down...");
}
