//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Compare contexts by pointer so consumers never re-render on identity.

use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;
use crate::services::browser::FetchTransport;

/// Client type used by the browser build.
pub(crate) type SiteClient = ApiClient<FetchTransport>;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<SiteClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, FetchTransport)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// Shared client from the nearest [`ApiCtx`]; builds a standalone client when
/// no provider is mounted.
#[hook]
pub(crate) fn use_api() -> Rc<SiteClient> {
    use_context::<ApiCtx>().map_or_else(
        || ApiCtx::new(crate::services::api_base_url()).client,
        |ctx| ctx.client,
    )
}
