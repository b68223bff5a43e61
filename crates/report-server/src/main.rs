//! Binary entrypoint for the report server.
//!
//! Configuration comes from flags or `REPORTS_*` environment variables (see
//! [`ServerConfig`]); log filtering from `RUST_LOG` (default `info`).

use std::process;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use report_server::config::ServerConfig;
use report_server::router::build_router;
use report_server::state::AppState;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    if let Err(err) = run(config).await {
        tracing::error!("{err}");
        process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), String> {
    let state =
        AppState::new(&config).map_err(|e| format!("failed to initialize state: {e}"))?;
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind {} failed: {e}", config.bind))?;
    tracing::info!("report server listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    tracing::info!("report server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
