//! Router assembly for both hosting modes.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ConfigError, Mode, ServerConfig};
use crate::proxy::DevProxy;

/// Build the router for the configured mode, with request tracing.
pub fn build(config: &ServerConfig) -> Result<Router, ConfigError> {
    let router = match config.mode {
        Mode::Production => static_router(&config.dist_dir)?,
        Mode::Development => {
            info!(upstream = %config.dev_server, "proxying to dev server");
            DevProxy::new(config.dev_server.clone())?.into_router()
        }
    };
    Ok(router.layer(TraceLayer::new_for_http()))
}

/// Serve `dist` and answer every unmatched path with its `index.html`.
///
/// The fallback keeps the file's `200 OK` so client-side routes resolve.
pub fn static_router(dist: &Path) -> Result<Router, ConfigError> {
    let index = dist.join("index.html");
    if !index.is_file() {
        return Err(ConfigError::MissingIndex(index));
    }
    info!(dist = %dist.display(), "serving built assets");

    let assets = ServeDir::new(dist).fallback(ServeFile::new(index));
    Ok(Router::new().fallback_service(assets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>HMSync</body></html>";

    fn dist() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), INDEX).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets").join("app.js"), "console.log('hi');").unwrap();
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_serves_index() {
        let dir = dist();
        let (status, content_type, body) = get(static_router(dir.path()).unwrap(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
        assert!(content_type.unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn existing_asset_is_served() {
        let dir = dist();
        let (status, content_type, body) =
            get(static_router(dir.path()).unwrap(), "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi');");
        assert!(content_type.unwrap().contains("javascript"));
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index_with_ok() {
        let dir = dist();
        for uri in ["/pricing", "/deep/client/route", "/assets/missing.js"] {
            let (status, _, body) = get(static_router(dir.path()).unwrap(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX, "{uri}");
        }
    }

    #[test]
    fn missing_index_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            static_router(dir.path()),
            Err(ConfigError::MissingIndex(path)) if path == dir.path().join("index.html")
        ));
    }

    #[tokio::test]
    async fn production_build_uses_static_router() {
        let dir = dist();
        let config = ServerConfig {
            port: 0,
            mode: Mode::Production,
            dist_dir: dir.path().to_path_buf(),
            dev_server: reqwest::Url::parse("http://127.0.0.1:1").unwrap(),
        };
        let (status, _, body) = get(build(&config).unwrap(), "/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[test]
    fn development_build_does_not_need_dist() {
        let config = ServerConfig {
            port: 0,
            mode: Mode::Development,
            dist_dir: "does/not/exist".into(),
            dev_server: reqwest::Url::parse("http://127.0.0.1:8080").unwrap(),
        };
        assert!(build(&config).is_ok());
    }
}
