//! Process bootstrap: configuration, logging, HTTP client and the server loop.

use aeas_telemetry::{LoggingConfig, service_span};
use tokio::net::TcpListener;
use tracing::{Instrument, info, warn};

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::http::{HostState, build_router};

/// Entry point used by the binary: load configuration from the environment
/// and serve until `ctrl-c`.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be
/// installed, or the listener cannot be bound.
pub async fn run_app() -> AppResult<()> {
    let config = ServerConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;
    aeas_telemetry::init_logging(&LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        build_sha: &config.build_sha,
    })
    .map_err(|err| AppError::telemetry("telemetry.init_logging", err))?;

    serve(&config).instrument(service_span("aeas-server")).await
}

/// Bind the configured address and serve the host router.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the listener
/// fails.
pub async fn serve(config: &ServerConfig) -> AppResult<()> {
    if !config.static_dir.join("index.html").is_file() {
        warn!(
            static_dir = %config.static_dir.display(),
            "static directory has no index.html; client routes will 404"
        );
    }

    let state = HostState::from_config(config)?;
    let router = build_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| AppError::io("listener.bind", err))?;
    info!(
        addr = %config.bind_addr,
        upstream = %config.api_upstream,
        static_dir = %config.static_dir.display(),
        "aeas-server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::io("server.serve", err))?;
    info!("aeas-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
