//! REST client for the school backend.
//!
//! # Design
//! - One client per app boot, generic over its transport so every request
//!   path is exercised natively with a recording fake.
//! - Non-success responses become [`ApiError::Status`] with the backend's
//!   message when one can be extracted.

use aeas_models::ValidationError;
use thiserror::Error;

pub mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod browser;
pub mod transport;

pub use api::{ApiClient, DEFAULT_API_URL, api_base_url};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Failure of an API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error("request failed")]
    Transport {
        /// Transport-level detail.
        detail: String,
    },
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Backend message, or the generic status message.
        message: String,
    },
    /// The success body did not match the expected shape.
    #[error("response decoding failed")]
    Decode {
        /// Decoder detail.
        detail: String,
    },
    /// The request body could not be serialised.
    #[error("request encoding failed")]
    Encode {
        /// Encoder detail.
        detail: String,
    },
    /// Filters were rejected before sending.
    #[error("invalid request filter")]
    Filter(#[from] ValidationError),
}

impl ApiError {
    /// HTTP status, for [`ApiError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
