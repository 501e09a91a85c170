use thiserror::Error;

/// Ways a single roll can fail.
///
/// None of these are retried; the caller decides what to show.
#[derive(Debug, Error)]
pub enum RollError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// Transport-level failure (connect, TLS, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON decoded but a field could not be normalized
    /// (generation name without a hyphen, fewer than six stats).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
