pub mod humanize;

use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::api::config::ServiceConfig;
use crate::proxy::humanize::humanize_minutes;

/// Field injected into every successful result, naming the backend host
pub const SERVICE_HOST_FIELD: &str = "SERVICE_HOST";
/// Field the backend reports elapsed seconds under
pub const DURATION_FIELD: &str = "duration";

/// The shortening service's reply, deserialized as an open mapping so
/// service-defined fields pass through untouched.
pub type RemoteShortenResult = Map<String, Value>;

/// Failure surface of the proxy call. Fails closed: a partially
/// transformed mapping is never handed back.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("failed to reach the shortening service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("shortening service responded with status {0}")]
    Status(StatusCode),

    #[error("shortening service returned a malformed body: {0}")]
    MalformedBody(String),
}

/// Sends a validated URL to the shortening service and normalizes the reply.
///
/// Performs exactly one outbound call:
/// 1. `POST {host}/set` with JSON body `{"url": ...}` and the bearer credential
/// 2. Rejects non-2xx responses and bodies that are not a JSON object
/// 3. Overwrites `duration` (elapsed seconds) with its humanized form
/// 4. Inserts `SERVICE_HOST` so the presentation layer can show the backend
///
/// The HTTP client lives for the duration of this call and is released on
/// every exit path. No retries.
///
/// # Arguments
/// * `url` - A URL that already passed validation
/// * `config` - Shortening service host, credential and timeout
///
/// # Returns
/// * `Result<RemoteShortenResult, ProxyError>` - The enriched mapping or the failure
pub async fn shorten(
    url: &str,
    config: &ServiceConfig,
) -> Result<RemoteShortenResult, ProxyError> {
    let endpoint = format!("{}/set", config.host);

    debug!("Building shortener client with timeout {:?}", config.request_timeout);
    let client = Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(ProxyError::Transport)?;

    info!("Forwarding URL to shortening service: {}", endpoint);
    let response = client
        .post(&endpoint)
        .bearer_auth(&config.api_key)
        .json(&json!({ "url": url }))
        .send()
        .await
        .map_err(|e| {
            error!("Failed to reach shortening service at {}: {}", endpoint, e);
            ProxyError::Transport(e)
        })?;

    let status = response.status();
    debug!("Shortening service responded with status {}", status);
    if !status.is_success() {
        error!("Shortening service returned non-success status {}", status);
        return Err(ProxyError::Status(status));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read shortening service response body: {}", e);
        ProxyError::Transport(e)
    })?;

    let mut result: RemoteShortenResult = serde_json::from_str(&body).map_err(|e| {
        error!("Shortening service returned a malformed body: {}", e);
        ProxyError::MalformedBody(e.to_string())
    })?;

    // Normalize the elapsed-time field; absent means nothing to normalize.
    if let Some(raw) = result.get(DURATION_FIELD) {
        let seconds = raw.as_f64().ok_or_else(|| {
            error!("Shortening service returned a non-numeric duration: {}", raw);
            ProxyError::MalformedBody(format!("non-numeric duration: {}", raw))
        })?;
        let humanized = humanize_minutes(seconds);
        debug!("Humanized duration {}s as {:?}", seconds, humanized);
        result.insert(DURATION_FIELD.to_string(), Value::String(humanized));
    }

    // Overwrites any same-named field from the remote response.
    result.insert(
        SERVICE_HOST_FIELD.to_string(),
        Value::String(config.host.clone()),
    );

    info!("Shortening service call completed");
    Ok(result)
}
