use thiserror::Error;

/// URLs in these variants have the API key redacted.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    Request(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Response from {0} is not valid JSON")]
    Decode(String, #[source] serde_json::Error),
}
