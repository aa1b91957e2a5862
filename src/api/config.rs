use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Default address the portal binds to
const DEFAULT_BIND_HOST: &str = "127.0.0.1";
/// Default port the portal listens on
const DEFAULT_BIND_PORT: u16 = 8080;
/// Default timeout for the outbound shortening call
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection details for the remote shortening service.
///
/// Read-only after startup; handlers receive a shared reference and never
/// mutate it.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the shortening service
    pub host: String,

    /// Bearer credential attached to every outbound call
    pub api_key: String,

    /// Timeout for the single outbound request
    pub request_timeout: Duration,
}

/// Full configuration for the portal process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP server to
    pub bind_host: String,

    /// Port to listen on
    pub bind_port: u16,

    /// Remote shortening service settings
    pub service: ServiceConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, failing fast on anything
    /// the portal cannot run without.
    ///
    /// Required: `SERVICE_HOST`, `SERVICE_API_KEY`.
    /// Optional: `BIND_HOST`, `BIND_PORT`, `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("Failed to read configuration from the environment")?;

        let host = settings
            .get_string("service_host")
            .context("SERVICE_HOST must be set to the shortening service base URL")?;
        let host = normalize_host(&host);
        if host.is_empty() {
            bail!("SERVICE_HOST must not be empty");
        }

        let api_key = settings
            .get_string("service_api_key")
            .context("SERVICE_API_KEY must be set to the shortening service credential")?;
        if api_key.is_empty() {
            bail!("SERVICE_API_KEY must not be empty");
        }

        let bind_host = settings
            .get_string("bind_host")
            .unwrap_or_else(|_| DEFAULT_BIND_HOST.to_string());

        let bind_port = settings
            .get_int("bind_port")
            .ok()
            .and_then(|port| u16::try_from(port).ok())
            .unwrap_or(DEFAULT_BIND_PORT);

        let timeout_secs = settings
            .get_int("request_timeout_secs")
            .ok()
            .and_then(|secs| u64::try_from(secs).ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            bind_host,
            bind_port,
            service: ServiceConfig {
                host,
                api_key,
                request_timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

/// Strips trailing slashes so endpoint paths can be appended verbatim.
fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('/').to_string()
}
