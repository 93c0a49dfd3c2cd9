//! `gloo-net` transport used in the browser.

use gloo_net::http::Request;

use crate::services::ApiError;
use crate::services::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Fetch-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut req = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }
        let response = req.send().await.map_err(|err| ApiError::Transport {
            detail: err.to_string(),
        })?;
        let status = response.status();
        HttpResponse::from_parts(status, response.text().await)
    }
}
