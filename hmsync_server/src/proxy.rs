//! Development proxy to the trunk dev server.
//!
//! Requests are buffered and replayed upstream with the same method, path,
//! query, headers and body; the upstream status, headers and body come back
//! unchanged apart from hop-by-hop headers.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, warn};

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded.
static HOP_BY_HOP: [header::HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("failed to read request body: {0}")]
    Body(#[source] axum::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        warn!(error = %self, "dev proxy failure");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Shared proxy state.
#[derive(Debug, Clone)]
pub struct DevProxy {
    client: reqwest::Client,
    upstream: Url,
}

impl DevProxy {
    /// Redirects are relayed to the browser, never followed here.
    pub fn new(upstream: Url) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, upstream })
    }

    /// Router that forwards every request.
    pub fn into_router(self) -> Router {
        Router::new().fallback(forward).with_state(Arc::new(self))
    }

    /// Upstream origin with the request's path and query. The origin never
    /// comes from the request, so `//host/...` targets stay on the dev server.
    fn target(&self, path: &str, query: Option<&str>) -> Url {
        let mut url = self.upstream.clone();
        url.set_path(path);
        url.set_query(query);
        url
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}

async fn forward(State(proxy): State<Arc<DevProxy>>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = proxy.target(parts.uri.path(), parts.uri.query());
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(ProxyError::Body)?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);

    debug!(method = %parts.method, %url, "proxying");
    let upstream = proxy
        .client
        .request(parts.method, url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
