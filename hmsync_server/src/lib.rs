//! # hmsync_server
//!
//! Hosting shim for the HMSync landing page.
//!
//! ## Modes
//!
//! - **production** - serves the trunk build output; any path that is not a
//!   file answers with `index.html` and `200 OK`
//! - **development** - forwards every request to `trunk serve`
//!
//! ## Usage
//!
//! ```bash
//! # Production (default), after `trunk build --release` in landing/
//! hmsync_server --dist landing/dist
//!
//! # Development, with `trunk serve` running on :8080
//! HMSYNC_MODE=development hmsync_server
//! ```

pub mod config;
pub mod proxy;
pub mod router;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

pub use config::{Args, Mode, ServerConfig};

/// Bind, serve and wait for Ctrl+C / SIGTERM.
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = router::build(&config).context("Failed to build router")?;
    let address = config.bind_addr();

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        address = %address,
        mode = ?config.mode,
        "Server running on port {}",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
