//! Typed endpoint wrappers.

use aeas_models::{
    ContactMessage, ContentFilters, ContentItem, CreateHolidayRequest, ErrorBody, FaqItem,
    Holiday, HolidayFilters, ListFilters, MailerResponse, MenuItem, NewsletterSubscription,
    Paginated, Permission, PermissionFilters, UpdateHolidayRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::services::ApiError;
use crate::services::transport::{HttpRequest, HttpTransport, Method, merge_headers};

/// Backend used when no build-time URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Base URL baked in at build time through `AEAS_API_URL`.
#[must_use]
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("AEAS_API_URL"))
}

fn resolve_base_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Generic message for a non-success status without a usable body.
#[must_use]
pub fn generic_status_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Build the error for a non-success response.
#[must_use]
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.summary())
        .unwrap_or_else(|| generic_status_message(status));
    ApiError::Status { status, message }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// REST client bound to one backend.
#[derive(Debug)]
pub struct ApiClient<T> {
    base_url: String,
    default_headers: Vec<(String, String)>,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Client for `base_url` sending JSON by default.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            transport,
        }
    }

    /// Backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and decode the JSON answer.
    ///
    /// # Errors
    /// Returns [`ApiError`] on transport failure, non-success status or an
    /// undecodable body.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: merge_headers(&self.default_headers, headers),
            body,
        };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(error_from_response(response.status, &response.body));
        }
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|err| ApiError::Decode {
            detail: err.to_string(),
        })
    }

    /// `GET path`.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None, &[]).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    /// See [`ApiClient::request`]; also [`ApiError::Encode`].
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(Method::Post, path, Some(encode(body)?), &[])
            .await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    /// See [`ApiClient::request`]; also [`ApiError::Encode`].
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(Method::Put, path, Some(encode(body)?), &[])
            .await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, path, None, &[]).await
    }

    /// Navigation menu.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let mut items: Vec<MenuItem> = self.get("/core/menu").await?;
        aeas_models::sort_menu(&mut items);
        Ok(items)
    }

    /// Page of public content.
    ///
    /// # Errors
    /// Returns [`ApiError::Filter`] before sending when `filters` are invalid.
    pub async fn fetch_content(
        &self,
        filters: &ContentFilters,
    ) -> Result<Paginated<ContentItem>, ApiError> {
        self.get(&filters.query_path("/public/content")?).await
    }

    /// One content item by slug.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn fetch_content_by_slug(
        &self,
        slug: &str,
        language: &str,
    ) -> Result<ContentItem, ApiError> {
        self.get(&format!(
            "/public/content/{}?language={}",
            segment(slug),
            segment(language)
        ))
        .await
    }

    /// Published FAQ entries sorted by their display order.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn fetch_faq(&self, language: &str) -> Result<Vec<FaqItem>, ApiError> {
        let mut items: Vec<FaqItem> = self
            .get(&format!("/public/faq?language={}", segment(language)))
            .await?;
        items.sort_by_key(|item| item.order);
        Ok(items)
    }

    /// Page of holidays.
    ///
    /// # Errors
    /// Returns [`ApiError::Filter`] before sending when `filters` are invalid.
    pub async fn list_holidays(
        &self,
        filters: &HolidayFilters,
    ) -> Result<Paginated<Holiday>, ApiError> {
        self.get(&filters.query_path("/holidays")?).await
    }

    /// One holiday.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get_holiday(&self, id: &str) -> Result<Holiday, ApiError> {
        self.get(&format!("/holidays/{}", segment(id))).await
    }

    /// Create a holiday.
    ///
    /// # Errors
    /// Returns [`ApiError::Filter`] for a blank name; see [`ApiClient::request`].
    pub async fn create_holiday(&self, body: &CreateHolidayRequest) -> Result<Holiday, ApiError> {
        body.validate()?;
        self.post("/holidays", body).await
    }

    /// Update a holiday.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn update_holiday(
        &self,
        id: &str,
        body: &UpdateHolidayRequest,
    ) -> Result<Holiday, ApiError> {
        self.put(&format!("/holidays/{}", segment(id)), body).await
    }

    /// Delete a holiday.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn delete_holiday(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/holidays/{}", segment(id))).await
    }

    /// Page of permissions.
    ///
    /// # Errors
    /// Returns [`ApiError::Filter`] before sending when `filters` are invalid.
    pub async fn list_permissions(
        &self,
        filters: &PermissionFilters,
    ) -> Result<Paginated<Permission>, ApiError> {
        self.get(&filters.query_path("/permissions")?).await
    }

    /// Permission categories.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn permission_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get("/permissions/categories").await
    }

    /// Permission modules.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn permission_modules(&self) -> Result<Vec<String>, ApiError> {
        self.get("/permissions/modules").await
    }

    /// Permissions granted to the current session.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn my_permissions(&self) -> Result<Vec<Permission>, ApiError> {
        self.get("/permissions/me").await
    }

    /// One permission by id.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get_permission(&self, id: &str) -> Result<Permission, ApiError> {
        self.get(&format!("/permissions/{}", segment(id))).await
    }

    /// One permission by code.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn permission_by_code(&self, code: &str) -> Result<Permission, ApiError> {
        self.get(&format!("/permissions/code/{}", segment(code)))
            .await
    }

    /// Send the contact form.
    ///
    /// # Errors
    /// Returns [`ApiError::Filter`] for an invalid message; see [`ApiClient::request`].
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<MailerResponse, ApiError> {
        message.validate()?;
        self.post("/public/mailer/send", message).await
    }

    /// Subscribe an address to the newsletter.
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] with status 409 when already subscribed.
    pub async fn subscribe_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<MailerResponse, ApiError> {
        subscription.validate()?;
        self.post("/public/mailer/newsletter/subscribe", subscription)
            .await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Encode {
        detail: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use aeas_models::{ContentKind, HolidayType};
    use chrono::NaiveDate;

    use super::*;
    use crate::services::transport::HttpResponse;

    #[derive(Default)]
    struct FakeTransport {
        responses: RefCell<VecDeque<HttpResponse>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            let fake = Self::default();
            fake.push(status, body);
            fake
        }

        fn push(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(HttpResponse {
                status,
                body: body.to_string(),
            });
        }

        fn last(&self) -> Option<HttpRequest> {
            self.sent.borrow().last().cloned()
        }
    }

    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Transport {
                    detail: "connection refused".to_string(),
                })
        }
    }

    fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
        ApiClient::new("https://api.example.pt/", transport)
    }

    const EMPTY_PAGE: &str = r#"{"data":[],"meta":{"page":1,"pageSize":9,"total":0,"totalPages":0}}"#;

    #[test]
    fn base_url_prefers_configuration() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("  ")), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("https://api.aeas.pt/")), "https://api.aeas.pt");
    }

    #[test]
    fn error_messages_come_from_the_body_when_possible() {
        assert_eq!(
            error_from_response(404, r#"{"message":"Not Found"}"#).to_string(),
            "Not Found"
        );
        assert_eq!(
            error_from_response(400, r#"{"message":["email must be an email"]}"#).to_string(),
            "email must be an email"
        );
        let unparsable = error_from_response(500, "<html>oops</html>");
        assert_eq!(unparsable.to_string(), "HTTP error! status: 500");
        assert_eq!(unparsable.status(), Some(500));
    }

    #[tokio::test]
    async fn status_errors_carry_code_and_message() {
        let api = client(FakeTransport::replying(404, r#"{"message":"Not Found"}"#));
        let err = api
            .fetch_content_by_slug("sem-slug", "pt")
            .await
            .err();
        assert_eq!(
            err,
            Some(ApiError::Status {
                status: 404,
                message: "Not Found".to_string()
            })
        );
        assert!(err.is_some_and(|err| err.is_not_found()));
    }

    #[tokio::test]
    async fn content_listing_sends_filters_and_json_headers() -> Result<(), ApiError> {
        let api = client(FakeTransport::replying(200, EMPTY_PAGE));
        let filters = ContentFilters {
            page: Some(2),
            page_size: Some(9),
            language: Some("en".to_string()),
            ..ContentFilters::of_kind(ContentKind::Event)
        };
        let page = api.fetch_content(&filters).await?;
        assert!(page.is_empty());
        let sent = api.transport().last().ok_or(ApiError::Transport {
            detail: "nothing sent".to_string(),
        })?;
        assert_eq!(sent.method, Method::Get);
        assert_eq!(
            sent.url,
            "https://api.example.pt/public/content?type=event&page=2&pageSize=9&language=en"
        );
        assert_eq!(sent.header("content-type"), Some("application/json"));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_filters_never_reach_the_network() {
        let api = client(FakeTransport::default());
        let filters = HolidayFilters {
            month: Some(13),
            ..HolidayFilters::default()
        };
        let result = api.list_holidays(&filters).await;
        assert!(matches!(result, Err(ApiError::Filter(_))));
        assert!(api.transport().last().is_none());
    }

    #[tokio::test]
    async fn empty_success_bodies_decode_as_unit() -> Result<(), ApiError> {
        let api = client(FakeTransport::replying(204, ""));
        api.delete_holiday("7").await?;
        let sent = api.transport().last();
        assert_eq!(sent.map(|req| (req.method, req.url)), Some((Method::Delete, "https://api.example.pt/holidays/7".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn holiday_writes_encode_json_bodies() -> Result<(), ApiError> {
        let holiday = r#"{"id":1,"name":"Carnaval","date":"2025-03-04","type":"school","isRecurring":false}"#;
        let transport = FakeTransport::replying(201, holiday);
        transport.push(200, holiday);
        let api = client(transport);
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).ok_or(ApiError::Encode {
            detail: "date".to_string(),
        })?;
        let created = api
            .create_holiday(&CreateHolidayRequest {
                name: "Carnaval".to_string(),
                date,
                kind: HolidayType::School,
                is_recurring: false,
                country: None,
                region: None,
                description: None,
            })
            .await?;
        assert_eq!(created.id, "1");
        assert_eq!(
            api.transport().last().and_then(|req| req.body),
            Some(r#"{"name":"Carnaval","date":"2025-03-04","type":"school","isRecurring":false}"#.to_string())
        );

        let update = UpdateHolidayRequest {
            description: Some("Interrupção letiva".to_string()),
            ..UpdateHolidayRequest::default()
        };
        api.update_holiday("1", &update).await?;
        let sent = api.transport().last();
        assert_eq!(sent.as_ref().map(|req| req.method), Some(Method::Put));
        assert_eq!(
            sent.map(|req| req.url),
            Some("https://api.example.pt/holidays/1".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn permission_paths_encode_segments() -> Result<(), ApiError> {
        let permission = r#"{"id":"p1","code":"news.publish","name":"Publicar"}"#;
        let api = client(FakeTransport::replying(200, permission));
        let found = api.permission_by_code("news.publish").await?;
        assert_eq!(found.code, "news.publish");
        assert_eq!(
            api.transport().last().map(|req| req.url),
            Some("https://api.example.pt/permissions/code/news.publish".to_string())
        );

        api.transport().push(200, r#"["conteudos","secretaria"]"#);
        assert_eq!(api.permission_modules().await?, vec!["conteudos", "secretaria"]);
        Ok(())
    }

    #[tokio::test]
    async fn newsletter_conflict_surfaces_status_409() {
        let api = client(FakeTransport::replying(
            409,
            r#"{"message":"Email already subscribed","error":"Conflict","statusCode":409}"#,
        ));
        let result = api
            .subscribe_newsletter(&NewsletterSubscription::new("pai@example.pt", "pt"))
            .await;
        assert_eq!(result.err().and_then(|err| err.status()), Some(409));
        assert_eq!(
            api.transport().last().map(|req| req.url),
            Some("https://api.example.pt/public/mailer/newsletter/subscribe".to_string())
        );
    }

    #[tokio::test]
    async fn transport_failures_are_reported() {
        let api = client(FakeTransport::default());
        let result = api.fetch_menu().await;
        assert!(matches!(result, Err(ApiError::Transport { .. })));
    }

    #[tokio::test]
    async fn faq_is_sorted_by_order() -> Result<(), ApiError> {
        let api = client(FakeTransport::replying(
            200,
            r#"[
                {"id":2,"question":{"pt":"B"},"answer":{"pt":"b"},"order":5},
                {"id":1,"question":{"pt":"A"},"answer":{"pt":"a"},"order":1}
            ]"#,
        ));
        let items = api.fetch_faq("pt").await?;
        let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(
            api.transport().last().map(|req| req.url),
            Some("https://api.example.pt/public/faq?language=pt".to_string())
        );
        Ok(())
    }
}
