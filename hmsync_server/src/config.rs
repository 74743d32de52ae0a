//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DIST: &str = "landing/dist";
/// `trunk serve` listens here unless told otherwise.
pub const DEFAULT_DEV_SERVER: &str = "http://127.0.0.1:8080";

/// Hosting behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Proxy every request to the trunk dev server.
    Development,
    /// Serve the built assets with index.html fallback.
    Production,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hmsync_server")]
#[command(about = "Serve the HMSync landing page")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Hosting mode (falls back to NODE_ENV=development, otherwise production)
    #[arg(long, env = "HMSYNC_MODE", value_enum)]
    pub mode: Option<Mode>,

    /// Directory with the built page (trunk build output)
    #[arg(long, env = "HMSYNC_DIST", default_value = DEFAULT_DIST)]
    pub dist: PathBuf,

    /// Upstream dev server for development mode
    #[arg(long, env = "HMSYNC_DEV_SERVER", default_value = DEFAULT_DEV_SERVER)]
    pub dev_server: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dev server url `{url}`: {reason}")]
    DevServerUrl { url: String, reason: String },
    #[error("index document not found at {}", .0.display())]
    MissingIndex(PathBuf),
    #[error("cannot build proxy client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub mode: Mode,
    pub dist_dir: PathBuf,
    pub dev_server: Url,
}

impl ServerConfig {
    /// Resolve CLI/env arguments. `node_env` is the value of `NODE_ENV`,
    /// consulted only when no explicit mode was given.
    pub fn from_args(args: Args, node_env: Option<&str>) -> Result<Self, ConfigError> {
        let mode = args.mode.unwrap_or(match node_env {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        });

        let dev_server = Url::parse(&args.dev_server).map_err(|e| ConfigError::DevServerUrl {
            url: args.dev_server.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(dev_server.scheme(), "http" | "https") {
            return Err(ConfigError::DevServerUrl {
                url: args.dev_server,
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Self {
            port: args.port,
            mode,
            dist_dir: args.dist,
            dev_server,
        })
    }

    /// Listen on every interface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hmsync_server").chain(argv.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn defaults() {
        let args = Args {
            port: DEFAULT_PORT,
            mode: None,
            dist: PathBuf::from(DEFAULT_DIST),
            dev_server: DEFAULT_DEV_SERVER.to_string(),
            log_level: "info".to_string(),
        };
        let config = ServerConfig::from_args(args, None).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.index_path(), PathBuf::from("landing/dist/index.html"));
    }

    #[test]
    fn explicit_flags() {
        let args = parse(&[
            "--port",
            "8081",
            "--mode",
            "development",
            "--dev-server",
            "http://localhost:9000",
        ]);
        let config = ServerConfig::from_args(args, None).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.dev_server.as_str(), "http://localhost:9000/");
    }

    #[test]
    fn node_env_selects_development_when_mode_unset() {
        let args = parse(&["--port", "1"]);
        let config = ServerConfig::from_args(args.clone(), Some("development")).unwrap();
        assert_eq!(config.mode, Mode::Development);

        let config = ServerConfig::from_args(args, Some("production")).unwrap();
        assert_eq!(config.mode, Mode::Production);
    }

    #[test]
    fn explicit_mode_wins_over_node_env() {
        let args = parse(&["--mode", "production"]);
        let config = ServerConfig::from_args(args, Some("development")).unwrap();
        assert_eq!(config.mode, Mode::Production);
    }

    #[test]
    fn rejects_bad_dev_server() {
        let args = parse(&["--dev-server", "not a url"]);
        assert!(matches!(
            ServerConfig::from_args(args, None),
            Err(ConfigError::DevServerUrl { .. })
        ));

        let args = parse(&["--dev-server", "ftp://example.com"]);
        assert!(matches!(
            ServerConfig::from_args(args, None),
            Err(ConfigError::DevServerUrl { .. })
        ));
    }
}
