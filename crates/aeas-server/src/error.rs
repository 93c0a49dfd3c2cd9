//! # Design
//!
//! - Centralize host-level errors for bootstrap and serving.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Result alias for host operations.
pub type AppResult<T> = Result<T, AppError>;

/// Host-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: aeas_telemetry::TelemetryError,
    },
    /// HTTP client construction failed.
    #[error("http client operation failed")]
    HttpClient {
        /// Operation identifier.
        operation: &'static str,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// IO operations failed.
    #[error("io operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        source: io::Error,
    },
}

impl AppError {
    pub(crate) const fn config(operation: &'static str, source: ConfigError) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: aeas_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn http_client(operation: &'static str, source: reqwest::Error) -> Self {
        Self::HttpClient { operation, source }
    }

    pub(crate) const fn io(operation: &'static str, source: io::Error) -> Self {
        Self::Io { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn app_error_helpers_build_variants() {
        let config = AppError::config(
            "config.from_env",
            ConfigError::InvalidValue {
                field: "AEAS_BIND_ADDR",
                reason: "not_a_socket_address",
                value: "nowhere".to_string(),
            },
        );
        assert!(matches!(config, AppError::Config { .. }));
        assert_eq!(config.to_string(), "configuration operation failed");
        assert!(config.source().is_some());

        let io = AppError::io("listener.bind", io::Error::other("address in use"));
        assert!(matches!(
            io,
            AppError::Io {
                operation: "listener.bind",
                ..
            }
        ));
        assert_eq!(io.to_string(), "io operation failed");
    }
}
