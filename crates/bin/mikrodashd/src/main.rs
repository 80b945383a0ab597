//! # mikrodashd: mikrodash daemon
//!
//! Composition root that wires the HTTP adapter and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`mikrodash.toml`, env vars)
//! - Initialise `tracing` logging
//! - Build the axum router around the dashboard bundle and client config
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other native crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use mikrodash_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let client_config = config.client_config()?;
    let dist_dir = config.dashboard.dist_dir.clone();
    if !dist_dir.join(mikrodash_adapter_http_axum::assets::INDEX_FILE).is_file() {
        tracing::warn!(
            dist_dir = %dist_dir.display(),
            "dashboard bundle not found; run `trunk build` in crates/adapters/dashboard_leptos"
        );
    }

    let router_url = client_config.router_url.clone();
    let state = AppState::new(client_config, dist_dir);
    let app = mikrodash_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, %router_url, "mikrodashd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("mikrodashd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
