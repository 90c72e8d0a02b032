//! Error type for the advisor integrations.

/// Errors from the content fetcher and the AI report generator.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream service returned a non-2xx status code.
    #[error("Upstream API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The model's response could not be parsed into the expected report
    /// shape.
    #[error("Malformed AI output: {0}")]
    MalformedOutput(String),
}
