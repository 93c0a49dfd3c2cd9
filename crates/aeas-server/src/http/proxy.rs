//! `/api/*` reverse proxy to the content backend.
//!
//! # Design
//! - The `/api` prefix is stripped; the rest of the path and the query are
//!   appended to the upstream base URL.
//! - Hop-by-hop headers are dropped in both directions; everything else,
//!   including `x-request-id`, is forwarded.
//! - Upstream status codes and bodies pass through untouched so the site
//!   sees backend errors exactly as the backend sent them.

use std::error::Error as StdError;
use std::sync::Arc;

use aeas_telemetry::RequestContext;
use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use tracing::{debug, warn};
use url::Url;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::http::errors::HostError;

/// Path prefix owned by the proxy.
pub const API_PREFIX: &str = "/api";

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Shared proxy state: one pooled client and the upstream base URL.
#[derive(Clone, Debug)]
pub struct HostState {
    client: reqwest::Client,
    upstream: Arc<Url>,
}

impl HostState {
    /// Wrap an existing client.
    #[must_use]
    pub fn new(client: reqwest::Client, upstream: Url) -> Self {
        Self {
            client,
            upstream: Arc::new(upstream),
        }
    }

    /// Build the pooled client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .build()
            .map_err(|err| AppError::http_client("proxy.client", err))?;
        Ok(Self::new(client, config.api_upstream.clone()))
    }

    /// Upstream base URL.
    #[must_use]
    pub fn upstream(&self) -> &Url {
        &self.upstream
    }
}

/// Upstream URL for a request path under [`API_PREFIX`].
#[must_use]
pub fn upstream_url(upstream: &Url, path: &str, query: Option<&str>) -> Url {
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let rest = if rest.is_empty() { "/" } else { rest };
    let mut target = upstream.clone();
    let base = upstream.path().trim_end_matches('/');
    target.set_path(&format!("{base}{rest}"));
    target.set_query(query.filter(|query| !query.is_empty()));
    target
}

pub(crate) async fn forward(State(state): State<HostState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let target = upstream_url(&state.upstream, parts.uri.path(), parts.uri.query());

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(err) if exceeds_limit(&err) => {
            return HostError::payload_too_large()
                .with_detail(format!("limit is {MAX_BODY_BYTES} bytes"))
                .into_response();
        }
        Err(err) => {
            debug!(error = %err, "request body could not be read");
            return HostError::unreadable_body().into_response();
        }
    };

    let mut headers = strip_hop_by_hop(&parts.headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    debug!(method = %parts.method, target = %target, "forwarding api request");
    let upstream = match state
        .client
        .request(parts.method, target.clone())
        .headers(headers)
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return upstream_failure(&target, &err),
    };

    let status = upstream.status();
    let mut headers = strip_hop_by_hop(upstream.headers());
    headers.remove(header::CONTENT_LENGTH);
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => return upstream_failure(&target, &err),
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

fn upstream_failure(target: &Url, err: &reqwest::Error) -> Response {
    let context = RequestContext::current();
    warn!(
        request_id = context.as_ref().and_then(RequestContext::request_id).unwrap_or_default(),
        route = context.as_ref().map_or(API_PREFIX, RequestContext::route),
        target = %target,
        timeout = err.is_timeout(),
        error = %err,
        "upstream request failed"
    );
    HostError::bad_gateway()
        .with_detail("the content service could not be reached")
        .into_response()
}

/// Whether buffering failed because the body is over [`MAX_BODY_BYTES`]
/// rather than because the client went away or sent a broken stream.
fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return true;
        }
        source = current.source();
    }
    false
}

fn strip_hop_by_hop(source: &HeaderMap) -> HeaderMap {
    let mut headers = source.clone();
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn base(raw: &str) -> Result<Url, url::ParseError> {
        Url::parse(raw)
    }

    #[test]
    fn prefix_is_replaced_by_upstream_base() -> Result<(), url::ParseError> {
        let upstream = base("https://api.aeantoniosergio.pt")?;
        assert_eq!(
            upstream_url(&upstream, "/api/public/content", Some("type=news&page=2")).as_str(),
            "https://api.aeantoniosergio.pt/public/content?type=news&page=2"
        );
        assert_eq!(
            upstream_url(&upstream, "/api", None).as_str(),
            "https://api.aeantoniosergio.pt/"
        );

        let nested = base("http://backend:3001/v1")?;
        assert_eq!(
            upstream_url(&nested, "/api/public/faq", Some("")).as_str(),
            "http://backend:3001/v1/public/faq"
        );
        Ok(())
    }

    #[tokio::test]
    async fn only_the_length_limit_counts_as_oversized() {
        let Err(err) = to_bytes(Body::from(vec![0_u8; 16]), 8).await else {
            panic!("body over the limit should fail to buffer");
        };
        assert!(exceeds_limit(&err));

        let broken = axum::Error::new(std::io::Error::other("connection reset"));
        assert!(!exceeds_limit(&broken));
    }

    #[test]
    fn hop_by_hop_headers_are_dropped() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let kept = strip_hop_by_hop(&headers);
        assert!(kept.get(header::CONNECTION).is_none());
        assert!(kept.get(header::TRANSFER_ENCODING).is_none());
        assert_eq!(kept.get("x-request-id"), Some(&HeaderValue::from_static("req-1")));
        assert_eq!(kept.len(), 2);
    }
}
