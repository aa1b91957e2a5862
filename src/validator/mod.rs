use thiserror::Error;
use tracing::warn;
use url::Url;

// Constants for validation
const MAX_URL_LENGTH: usize = 2048; // Maximum allowable URL length

// Schemes accepted by the syntactic check; anything else is rejected as
// unrecognized, not as a reputation judgement.
const RECOGNIZED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Rejection for a caller-supplied string that is not a syntactically
/// valid URL. Deliberately opaque: the reason is logged where it is
/// detected, never handed back to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid URL")]
pub struct InvalidUrl;

/// Checks that a string is a syntactically valid URL.
///
/// Syntax only: a recognized scheme, a well-formed non-empty authority,
/// and generic URL grammar. No network access, no DNS resolution.
///
/// # Arguments
/// * `url` - The raw string to check, assumed attacker-controlled
///
/// # Returns
/// * `Ok(())` when the string parses as a URL, `Err(InvalidUrl)` otherwise
pub fn validate_url(url: &str) -> Result<(), InvalidUrl> {
    if url.is_empty() {
        warn!("Rejected empty URL");
        return Err(InvalidUrl);
    }

    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejected URL exceeding maximum length: {} > {}",
            url.len(),
            MAX_URL_LENGTH
        );
        return Err(InvalidUrl);
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Rejected unparseable URL: {}", e);
            return Err(InvalidUrl);
        }
    };

    if !RECOGNIZED_SCHEMES.contains(&parsed.scheme()) {
        warn!("Rejected URL with unrecognized scheme: {}", parsed.scheme());
        return Err(InvalidUrl);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => {
            warn!("Rejected URL without an authority component");
            Err(InvalidUrl)
        }
    }
}
