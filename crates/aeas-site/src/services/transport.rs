//! Transport seam between the API client and the network.

use std::fmt::{self, Display, Formatter};

use crate::services::ApiError;

/// HTTP verbs used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// `GET`.
    Get,
    /// `POST`.
    Post,
    /// `PUT`.
    Put,
    /// `DELETE`.
    Delete,
}

impl Method {
    /// Uppercase verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// Verb.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    /// Headers after merging defaults and overrides.
    pub headers: Vec<(String, String)>,
    /// Serialised JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Body text (possibly empty).
    pub body: String,
}

impl HttpResponse {
    /// Response from a status and the outcome of reading its body. A body
    /// that could not be read is a transport failure whatever the status.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when `body` is an error.
    pub fn from_parts<E: Display>(status: u16, body: Result<String, E>) -> Result<Self, ApiError> {
        body.map(|body| Self { status, body })
            .map_err(|err| ApiError::Transport {
                detail: format!("failed to read response body: {err}"),
            })
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Something that can execute an [`HttpRequest`].
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Send the request and return the raw response.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Merge per-call headers over defaults; names compare case-insensitively and
/// overrides replace the default value in place.
#[must_use]
pub fn merge_headers(
    defaults: &[(String, String)],
    overrides: &[(&str, &str)],
) -> Vec<(String, String)> {
    let mut merged = defaults.to_vec();
    for (name, value) in overrides {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = (*value).to_string(),
            None => merged.push(((*name).to_string(), (*value).to_string())),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_defaults_case_insensitively() {
        let defaults = vec![("Content-Type".to_string(), "application/json".to_string())];
        let merged = merge_headers(
            &defaults,
            &[("content-type", "text/plain"), ("Accept-Language", "pt")],
        );
        assert_eq!(
            merged,
            vec![
                ("Content-Type".to_string(), "text/plain".to_string()),
                ("Accept-Language".to_string(), "pt".to_string()),
            ]
        );
    }

    #[test]
    fn unreadable_bodies_are_transport_errors() {
        let failed = HttpResponse::from_parts(200, Err("stream aborted"));
        assert!(matches!(failed, Err(ApiError::Transport { .. })));

        let read = HttpResponse::from_parts::<&str>(201, Ok("{}".to_string()));
        assert_eq!(
            read.ok(),
            Some(HttpResponse {
                status: 201,
                body: "{}".to_string(),
            })
        );
    }

    #[test]
    fn success_covers_2xx_only() {
        let response = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(response(204).is_success());
        assert!(!response(304).is_success());
        assert!(!response(199).is_success());
    }
}
