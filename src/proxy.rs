//! Backend Forwarding
//!
//! Passes `/api/*` requests through to the analytics backend unchanged:
//! method, path, query, body and end-to-end headers go up, status, headers
//! and a streamed body come back. Failures on the way are reported as
//! `{"error": ".."}` JSON, the same shape the backend uses.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use url::Url;

use crate::config::ServerConfig;

/// Headers that describe one connection rather than the message
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Backend did not respond within {0} seconds")]
    Timeout(u64),

    #[error("Request body exceeds the {0} byte limit")]
    BodyTooLarge(usize),

    #[error("Invalid upstream URL: {0}")]
    InvalidUpstream(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::InvalidUpstream(_) | ProxyError::Client(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Shared state for the forwarding handler
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: Url,
    timeout_secs: u64,
    max_body_bytes: usize,
}

impl ProxyState {
    pub fn new(backend_url: Url, timeout_secs: u64, max_body_bytes: usize) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;

        Ok(Self {
            client,
            backend_url,
            timeout_secs,
            max_body_bytes,
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, ProxyError> {
        let backend = config
            .backend()
            .map_err(|e| ProxyError::InvalidUpstream(e.to_string()))?;
        Self::new(backend, config.request_timeout_secs, config.max_body_bytes)
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    /// Backend URL for an incoming path and query; any path prefix on the
    /// configured base is kept.
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> Result<Url, ProxyError> {
        let base = self.backend_url.as_str().trim_end_matches('/');
        let target = match query {
            Some(q) => format!("{base}{path}?{q}"),
            None => format!("{base}{path}"),
        };
        Url::parse(&target).map_err(|e| ProxyError::InvalidUpstream(format!("{target}: {e}")))
    }
}

/// Copy end-to-end headers; `host` is left for the client to set for the backend.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name) || name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Handler for `ANY /api/*`
pub async fn forward(
    State(state): State<Arc<ProxyState>>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = state.upstream_url(parts.uri.path(), parts.uri.query())?;

    let declared_len = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared_len.is_some_and(|len| len > state.max_body_bytes) {
        return Err(ProxyError::BodyTooLarge(state.max_body_bytes));
    }
    let body = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|_| ProxyError::BodyTooLarge(state.max_body_bytes))?;

    log::debug!("{} {} -> {} ({} bytes)", parts.method, parts.uri, url, body.len());

    let upstream = state
        .client
        .request(parts.method.clone(), url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                log::warn!("{} {} timed out upstream", parts.method, parts.uri.path());
                ProxyError::Timeout(state.timeout_secs)
            } else {
                log::warn!("{} {} failed upstream: {}", parts.method, parts.uri.path(), e);
                ProxyError::Unreachable(e.to_string())
            }
        })?;

    let status = upstream.status();
    let mut headers = HeaderMap::with_capacity(upstream.headers().len());
    for (name, value) in upstream.headers() {
        if !HOP_BY_HOP.contains(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    log::debug!("{} {} <- {}", parts.method, parts.uri.path(), status);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
