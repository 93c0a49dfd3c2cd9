//! End-to-end checks of the host router against a mocked backend.

use std::path::Path;
use std::time::Duration;

use aeas_models::{ContentItem, Paginated};
use aeas_server::{HealthResponse, HostState, MAX_BODY_BYTES, ProblemDetails, build_router};
use anyhow::{Context, Result};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use url::Url;

const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";
const APP_JS: &str = "console.log('aeas');";

fn site_dir() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("index.html"), INDEX_HTML)?;
    std::fs::create_dir(dir.path().join("assets"))?;
    std::fs::write(dir.path().join("assets").join("app.js"), APP_JS)?;
    Ok(dir)
}

fn host(upstream: &str, static_dir: &Path) -> Result<axum::Router> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let state = HostState::new(client, Url::parse(upstream)?);
    Ok(build_router(state, static_dir))
}

async fn body_text(response: Response) -> Result<String> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn get_requests_forward_path_query_and_request_id() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/public/content")
                .query_param("type", "news")
                .query_param("page", "2")
                .header_exists("x-request-id");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "data": [{"id": 31, "slug": "feira-de-ciencias", "title": "Feira de Ciências"}],
                    "meta": {"page": 2, "pageSize": 9, "total": 10, "totalPages": 2}
                }));
        })
        .await;
    let site = site_dir()?;
    let app = host(&server.base_url(), site.path())?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/public/content?type=news&page=2")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    let page: Paginated<ContentItem> = serde_json::from_str(&body_text(response).await?)?;
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.total_pages, 2);
    assert_eq!(page.data[0].id, "31");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn post_bodies_are_forwarded_and_conflicts_pass_through() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/public/mailer/newsletter/subscribe")
                .json_body(json!({"email": "encarregado@example.pt"}));
            then.status(409)
                .header("content-type", "application/json")
                .json_body(json!({"message": "Email already subscribed"}));
        })
        .await;
    let site = site_dir()?;
    let app = host(&server.base_url(), site.path())?;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/public/mailer/newsletter/subscribe")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email":"encarregado@example.pt"}"#))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = serde_json::from_str(&body_text(response).await?)?;
    assert_eq!(body["message"], "Email already subscribed");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() -> Result<()> {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };
    let site = site_dir()?;
    let app = host(&format!("http://127.0.0.1:{port}"), site.path())?;

    let response = app
        .oneshot(Request::builder().uri("/api/public/faq").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/problem+json")
    );
    let problem: ProblemDetails = serde_json::from_str(&body_text(response).await?)?;
    assert_eq!(problem.status, 502);
    assert!(problem.kind.ends_with("/bad-gateway"));
    Ok(())
}

#[tokio::test]
async fn oversized_bodies_are_rejected_before_forwarding() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/public/mailer/send");
            then.status(200);
        })
        .await;
    let site = site_dir()?;
    let app = host(&server.base_url(), site.path())?;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/public/mailer/send")
                .body(Body::from(vec![b'a'; MAX_BODY_BYTES + 1]))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    mock.assert_calls_async(0).await;
    Ok(())
}

#[tokio::test]
async fn healthz_reports_status_and_build() -> Result<()> {
    let site = site_dir()?;
    let app = host("http://127.0.0.1:9", site.path())?;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body_text(response).await?)?;
    assert_eq!(health.status, "ok");
    assert!(!health.build.is_empty());
    Ok(())
}

#[tokio::test]
async fn client_routes_fall_back_to_index_html() -> Result<()> {
    let site = site_dir()?;
    let app = host("http://127.0.0.1:9", site.path())?;

    let deep_link = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/eventos/dia-do-agrupamento")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(deep_link.status(), StatusCode::OK);
    assert_eq!(body_text(deep_link).await?, INDEX_HTML);

    let asset = app
        .oneshot(Request::builder().uri("/assets/app.js").body(Body::empty())?)
        .await?;
    assert_eq!(asset.status(), StatusCode::OK);
    let body = body_text(asset).await.context("asset body")?;
    assert_eq!(body, APP_JS);
    Ok(())
}

#[tokio::test]
async fn preflight_allows_every_verb_the_client_sends() -> Result<()> {
    let site = site_dir()?;
    let app = host("http://127.0.0.1:9", site.path())?;

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/holidays/7")
                .header(header::ORIGIN, "https://aeantoniosergio.pt")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .body(Body::empty())?,
        )
        .await?;

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|value| value.to_str().ok())
        .context("allow-methods header")?
        .to_string();
    for verb in ["GET", "POST", "PUT", "DELETE"] {
        assert!(allowed.contains(verb), "{verb} missing from {allowed}");
    }
    Ok(())
}
