//! HAFAS client error types.

/// Errors from the HAFAS HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum HafasError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Leading slice of the offending body, for diagnostics.
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by HAFAS API")]
    RateLimited,
}
