//! Daemon entry point for the campaign MCP server.
//!
//! Loads configuration from the environment, initializes logging, and
//! serves the MCP protocol over stdio until the peer closes the stream
//! or the process is interrupted.

mod config;

use campaign_core::control::CampaignControlPlane;
use campaign_mcp::server::serve_stdio;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CampaignConfig;

#[tokio::main]
async fn main() {
    // Logs must go to stderr; stdout carries the MCP protocol.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_mcpd=info,campaign_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = CampaignConfig::from_args()?;
    let control = CampaignControlPlane::from_path(config.data_path);

    tracing::info!(
        data_path = %control.store().path().display(),
        "starting campaign MCP server over stdio"
    );

    tokio::select! {
        result = serve_stdio(control) => {
            tracing::info!("client closed the stream, shutting down");
            result
        }
        () = shutdown_signal() => {
            tracing::info!("server stopped by user");
            Ok(())
        }
    }
}

/// Waits for Ctrl+C or, on Unix, SIGTERM.
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
        () = ctrl_c => {}
        _ = terminate => {}
    }
}
