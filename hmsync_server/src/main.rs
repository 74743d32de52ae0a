use anyhow::Result;
use clap::Parser;
use tracing::info;

use hmsync_server::{Args, Mode, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting hmsync_server v{}", env!("CARGO_PKG_VERSION"));

    let node_env = std::env::var("NODE_ENV").ok();
    let config = ServerConfig::from_args(args, node_env.as_deref())?;

    match config.mode {
        Mode::Production => info!("Serving {}", config.dist_dir.display()),
        Mode::Development => info!("Proxying to {}", config.dev_server),
    }

    hmsync_server::run(config).await
}
