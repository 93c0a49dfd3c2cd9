//! Per-request identifiers for the host.
//!
//! The host's request middleware builds one [`RequestContext`] per request,
//! records it on the `http.request` span and scopes it over the handler, so
//! code that has no access to the request (proxy error paths) can still log
//! the request id and matched route.

use std::future::Future;
use std::sync::Arc;

use tracing::Span;

use crate::init::build_sha;

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// Identifiers of the request being served.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Arc<str>,
    route: Arc<str>,
}

impl RequestContext {
    /// Context for a request id (possibly empty) and its route.
    #[must_use]
    pub fn new(request_id: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            request_id: Arc::from(request_id.into()),
            route: Arc::from(route.into()),
        }
    }

    /// Request id, unless the request arrived without one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        Some(&*self.request_id).filter(|id| !id.is_empty())
    }

    /// Matched route template, or the raw path for unmatched requests.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Fill the `request_id` and `route` fields of `span`.
    pub fn record_on(&self, span: &Span) {
        if let Some(id) = self.request_id() {
            span.record("request_id", id);
        }
        span.record("route", self.route());
    }

    /// Run `fut` with this context as [`RequestContext::current`].
    pub async fn scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT.scope(self, fut).await
    }

    /// Context of the request being handled on this task.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(Clone::clone).ok()
    }
}

/// Span carrying the service name and build SHA, for process-level work
/// such as startup and shutdown.
#[must_use]
pub fn service_span(service: &str) -> Span {
    tracing::info_span!("service", name = %service, build_sha = %build_sha())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scoped_context_is_visible_only_inside_the_future() {
        let context = RequestContext::new("req-42", "/api/{*path}");
        let seen = context
            .clone()
            .scope(async { RequestContext::current() })
            .await;
        assert_eq!(seen, Some(context));
        assert!(RequestContext::current().is_none());
    }

    #[test]
    fn empty_request_ids_are_absent() {
        let context = RequestContext::new("", "/healthz");
        assert_eq!(context.request_id(), None);
        assert_eq!(context.route(), "/healthz");
        assert_eq!(RequestContext::new("req-1", "/").request_id(), Some("req-1"));
    }
}
