#![forbid(unsafe_code)]
#![warn(
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
//! Logging and request tracing for the site host.
//!
//! This crate centralises subscriber setup, the build identifier and the
//! request-id plumbing so every log line of the host carries the same fields.

pub mod context;
pub mod error;
pub mod init;
pub mod layers;

pub use context::{RequestContext, service_span};
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use layers::{REQUEST_ID_HEADER, propagate_request_id_layer, set_request_id_layer};
