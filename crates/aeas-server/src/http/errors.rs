//! RFC9457-style problem responses produced by the host itself.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Problem type for backend transport failures.
pub(crate) const PROBLEM_BAD_GATEWAY: &str = "https://aeantoniosergio.pt/problems/bad-gateway";
/// Problem type for request bodies over the proxy limit.
pub(crate) const PROBLEM_PAYLOAD_TOO_LARGE: &str =
    "https://aeantoniosergio.pt/problems/payload-too-large";
/// Problem type for request bodies that could not be read.
pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://aeantoniosergio.pt/problems/bad-request";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// RFC9457 problem document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short, human-readable summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Diagnostic message when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error returned by host handlers.
#[derive(Debug)]
pub(crate) struct HostError {
    status: StatusCode,
    kind: &'static str,
    title: &'static str,
    detail: Option<String>,
}

impl HostError {
    const fn new(status: StatusCode, kind: &'static str, title: &'static str) -> Self {
        Self {
            status,
            kind,
            title,
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub(crate) const fn bad_gateway() -> Self {
        Self::new(StatusCode::BAD_GATEWAY, PROBLEM_BAD_GATEWAY, "upstream unavailable")
    }

    pub(crate) const fn payload_too_large() -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            PROBLEM_PAYLOAD_TOO_LARGE,
            "request body too large",
        )
    }

    pub(crate) const fn unreadable_body() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            PROBLEM_BAD_REQUEST,
            "request body could not be read",
        )
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let body = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
        };
        let mut response = (self.status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_CONTENT_TYPE));
        response
    }
}
