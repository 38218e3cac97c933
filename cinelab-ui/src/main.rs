//! cinelab-ui - Browser UI service for Cinelab
//!
//! Serves the embedded single-page UI; the browser calls cinelab-api
//! directly for all movie, review, and rating data.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelab_common::config::FileConfig;
use cinelab_ui::AppState;

const DEFAULT_PORT: u16 = 5851;
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5850";

/// Command-line arguments for cinelab-ui
#[derive(Parser, Debug)]
#[command(name = "cinelab-ui")]
#[command(about = "Browser UI service for Cinelab")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CINELAB_UI_PORT")]
    port: Option<u16>,

    /// Base URL of the cinelab-api service
    #[arg(long, env = "CINELAB_API_BASE_URL")]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinelab_ui=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Cinelab UI (cinelab-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let file_config = FileConfig::load();

    let port = args.port.or(file_config.ui_port).unwrap_or(DEFAULT_PORT);
    let api_base_url = args
        .api_base_url
        .or(file_config.api_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    info!("API base URL: {}", api_base_url);

    let state = AppState::new(api_base_url);
    let app = cinelab_ui::build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("cinelab-ui listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
