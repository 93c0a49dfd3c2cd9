#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Production host for the school website.
//!
//! Serves the compiled single-page application with an `index.html`
//! fallback for client-side routes, forwards `/api/*` to the content backend
//! and reports liveness on `/healthz`.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod http;

pub use bootstrap::run_app;
pub use config::{ConfigError, ServerConfig};
pub use error::{AppError, AppResult};
pub use http::{
    API_PREFIX, HealthResponse, HostState, MAX_BODY_BYTES, ProblemDetails, build_router,
    upstream_url,
};
