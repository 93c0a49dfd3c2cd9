//! Host configuration loaded from `AEAS_*` environment variables.
//!
//! # Design
//! - Every variable has a default, so a bare `aeas-server` starts locally.
//! - Values are validated once at startup; the rest of the host only sees
//!   typed fields.
//! - Lookup is injectable so tests never touch the process environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use aeas_telemetry::{DEFAULT_LOG_LEVEL, LogFormat};
use thiserror::Error;
use url::Url;

/// Listen address variable.
pub const ENV_BIND_ADDR: &str = "AEAS_BIND_ADDR";
/// Directory holding the built site.
pub const ENV_STATIC_DIR: &str = "AEAS_STATIC_DIR";
/// Backend base URL that `/api/*` is forwarded to.
pub const ENV_API_UPSTREAM: &str = "AEAS_API_UPSTREAM";
/// Upstream request timeout in seconds.
pub const ENV_PROXY_TIMEOUT_SECS: &str = "AEAS_PROXY_TIMEOUT_SECS";
/// Log level directive (overridden by `RUST_LOG`).
pub const ENV_LOG_LEVEL: &str = "AEAS_LOG_LEVEL";
/// Log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "AEAS_LOG_FORMAT";
/// Build identifier reported by `/healthz` and in logs.
pub const ENV_BUILD_SHA: &str = "AEAS_BUILD_SHA";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "crates/aeas-site/dist";
const DEFAULT_API_UPSTREAM: &str = "https://api.aeantoniosergio.pt";
const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BUILD_SHA: &str = "dev";

/// Errors raised while reading host configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that could not be used.
    #[error("invalid configuration value")]
    InvalidValue {
        /// Variable name.
        field: &'static str,
        /// Machine-readable reason.
        reason: &'static str,
        /// Offending value.
        value: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            reason,
            value: value.to_string(),
        }
    }
}

/// Validated host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Built site directory (must contain `index.html`).
    pub static_dir: PathBuf,
    /// Backend base URL; never ends with `/`.
    pub api_upstream: Url,
    /// Timeout applied to each proxied request.
    pub proxy_timeout: Duration,
    /// Log level directive.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Build identifier.
    pub build_sha: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for malformed variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`; blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for malformed variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = read(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::invalid(ENV_BIND_ADDR, "not_a_socket_address", &bind_raw))?;

        let static_dir = PathBuf::from(
            read(ENV_STATIC_DIR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );

        let upstream_raw =
            read(ENV_API_UPSTREAM).unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_string());
        let api_upstream = parse_upstream(&upstream_raw)?;

        let proxy_timeout = match read(ENV_PROXY_TIMEOUT_SECS) {
            None => Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::invalid(
                        ENV_PROXY_TIMEOUT_SECS,
                        "not_a_positive_integer",
                        &raw,
                    ));
                }
            },
        };

        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = match read(ENV_LOG_FORMAT) {
            None => LogFormat::infer(),
            Some(raw) => LogFormat::parse(&raw)
                .ok_or_else(|| ConfigError::invalid(ENV_LOG_FORMAT, "unknown_format", &raw))?,
        };
        let build_sha = read(ENV_BUILD_SHA).unwrap_or_else(|| DEFAULT_BUILD_SHA.to_string());

        Ok(Self {
            bind_addr,
            static_dir,
            api_upstream,
            proxy_timeout,
            log_level,
            log_format,
            build_sha,
        })
    }
}

/// Parse an upstream base URL. Only `http` and `https` are accepted and a
/// trailing slash is dropped so paths can be appended verbatim.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for unparsable or non-http URLs.
pub fn parse_upstream(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)
        .map_err(|_| ConfigError::invalid(ENV_API_UPSTREAM, "not_a_url", raw))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(ENV_API_UPSTREAM, "unsupported_scheme", raw));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::invalid(ENV_API_UPSTREAM, "unexpected_query", raw));
    }
    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() -> Result<(), ConfigError> {
        let config = load(&[])?;
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.api_upstream.as_str(), "https://api.aeantoniosergio.pt/");
        assert_eq!(config.proxy_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.build_sha, "dev");
        Ok(())
    }

    #[test]
    fn overrides_are_trimmed_and_parsed() -> Result<(), ConfigError> {
        let config = load(&[
            (ENV_BIND_ADDR, " 127.0.0.1:9000 "),
            (ENV_API_UPSTREAM, "http://backend:3001/v1/"),
            (ENV_PROXY_TIMEOUT_SECS, "5"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_BUILD_SHA, "abc123"),
            (ENV_LOG_LEVEL, ""),
        ])?;
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.api_upstream.as_str(), "http://backend:3001/v1");
        assert_eq!(config.proxy_timeout, Duration::from_secs(5));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.build_sha, "abc123");
        Ok(())
    }

    #[test]
    fn non_http_upstreams_are_rejected() {
        let err = load(&[(ENV_API_UPSTREAM, "ftp://files.example.org")]);
        assert_eq!(
            err,
            Err(ConfigError::InvalidValue {
                field: ENV_API_UPSTREAM,
                reason: "unsupported_scheme",
                value: "ftp://files.example.org".to_string(),
            })
        );
        assert!(load(&[(ENV_API_UPSTREAM, "not a url")]).is_err());
    }

    #[test]
    fn malformed_values_name_their_variable() {
        for (field, value) in [
            (ENV_BIND_ADDR, "localhost"),
            (ENV_PROXY_TIMEOUT_SECS, "0"),
            (ENV_PROXY_TIMEOUT_SECS, "soon"),
            (ENV_LOG_FORMAT, "xml"),
        ] {
            match load(&[(field, value)]) {
                Err(ConfigError::InvalidValue { field: reported, .. }) => {
                    assert_eq!(reported, field);
                }
                other => panic!("expected error for {field}={value}, got {other:?}"),
            }
        }
    }
}
