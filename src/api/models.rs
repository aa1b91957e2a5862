use serde::Deserialize;

/// Form payload for the shorten action
#[derive(Debug, Deserialize, Clone)]
pub struct ShortenRequest {
    /// Caller-supplied URL; untrusted until validated
    pub url: String,
}
