//! Same-origin forwarding of `/api/*` to the remote reservation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app calls the reservation API at a base URL fixed at build
//! time. When that base is the relative `/api`, this module relays each call
//! to `STUDYHALL_UPSTREAM_API` so the deployment needs no CORS setup.
//!
//! ERROR HANDLING
//! ==============
//! Upstream connection failures become `502 Bad Gateway`. Upstream status
//! codes (including 401/403) are relayed untouched so the client can react
//! to them.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Headers that describe a single hop and must not be relayed.
const HOP_HEADERS: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    #[error("request body unreadable: {0}")]
    RequestBody(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::ClientBuild(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

// =============================================================================
// PROXY
// =============================================================================

#[derive(Clone)]
pub struct ApiProxy {
    http: reqwest::Client,
    base: Arc<str>,
}

impl ApiProxy {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base: Arc::from(base.trim_end_matches('/')) })
    }
}

pub fn routes(proxy: ApiProxy) -> Router {
    Router::new().route("/api/{*path}", any(forward)).with_state(proxy)
}

async fn forward(
    State(proxy): State<ApiProxy>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;
    let url = upstream_url(&proxy.base, &path, query.as_deref());

    let upstream = proxy
        .http
        .request(method.clone(), &url)
        .headers(relayed_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream unreachable");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let response_headers = relayed_headers(upstream.headers());
    let bytes: Bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
    Ok((status, response_headers, bytes).into_response())
}

/// Join the upstream base with the captured path and raw query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/{path}?{query}"),
        None => format!("{base}/{path}"),
    }
}

pub(crate) fn forwardable_header(name: &HeaderName) -> bool {
    !HOP_HEADERS.contains(&name.as_str())
}

fn relayed_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| forwardable_header(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
