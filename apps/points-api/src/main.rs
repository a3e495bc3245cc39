//! # Points API Server
//!
//! Binary entry point: load config, build state, serve until signalled.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Points API Server                                │
//! │                                                                         │
//! │  init tracing ──► ApiConfig::load ──► AppState ──► bind ──► serve      │
//! │                                                               │         │
//! │                                       Ctrl+C / SIGTERM ───────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use points_api::{router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Points API server...");

    // Load configuration
    let config = ApiConfig::load(None)?;
    info!(
        addr = %config.server.bind_address(),
        invalid_amount = %config.scoring.invalid_amount,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    let app = router(state);

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,points=debug,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
