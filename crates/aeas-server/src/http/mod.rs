//! Host router: health, the `/api` proxy and the static site.

mod errors;
mod health;
mod proxy;

use std::path::Path;
use std::time::Duration;

use aeas_telemetry::{REQUEST_ID_HEADER, RequestContext, build_sha};
use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::Method,
    middleware::{self, Next},
    response::Response,
    routing::{any, get},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::Span;

pub use errors::ProblemDetails;
pub use health::HealthResponse;
pub use proxy::{API_PREFIX, HostState, MAX_BODY_BYTES, upstream_url};

/// Build the host router serving `static_dir` with an `index.html` fallback
/// for client-side routes.
pub fn build_router(state: HostState, static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                path = %request.uri().path(),
                route = tracing::field::Empty,
                request_id = tracing::field::Empty,
                build_sha = %build_sha(),
                status_code = tracing::field::Empty,
                latency_ms = tracing::field::Empty
            )
        })
        .on_response(|response: &Response, latency: Duration, span: &Span| {
            span.record("status_code", response.status().as_u16());
            let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
            span.record("latency_ms", latency_ms);
        });

    let layered = ServiceBuilder::new()
        .layer(aeas_telemetry::propagate_request_id_layer())
        .layer(aeas_telemetry::set_request_id_layer())
        .layer(trace_layer);

    Router::new()
        .route("/healthz", get(health::healthz))
        .route(API_PREFIX, any(proxy::forward))
        .route("/api/{*path}", any(proxy::forward))
        .fallback_service(site)
        .layer(middleware::from_fn(request_context))
        .layer(layered)
        .layer(cors_layer)
        .with_state(state)
}

/// Request id (assigned by the request-id layer) and matched route of
/// `request`; unmatched requests report their raw path.
fn context_of(request: &Request) -> RequestContext {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);
    RequestContext::new(request_id, route)
}

/// Record the request context on the surrounding `http.request` span and
/// keep it available to the handler.
async fn request_context(request: Request, next: Next) -> Response {
    let context = context_of(&request);
    context.record_on(&Span::current());
    context.scope(next.run(request)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn context_reads_request_id_and_falls_back_to_the_raw_path() -> Result<(), axum::http::Error> {
        let request = axum::http::Request::builder()
            .uri("/eventos/feira-de-ciencias")
            .header(REQUEST_ID_HEADER, "req-9")
            .body(Body::empty())?;
        let context = context_of(&request);
        assert_eq!(context.request_id(), Some("req-9"));
        assert_eq!(context.route(), "/eventos/feira-de-ciencias");

        let anonymous = axum::http::Request::builder().uri("/healthz").body(Body::empty())?;
        assert_eq!(context_of(&anonymous).request_id(), None);
        Ok(())
    }
}
