use thiserror::Error;

/// Errors surfaced by [`crate::Client`].
///
/// Endpoint failures carry fixed messages rather than the server's status or
/// body: callers render them directly and the lab server's error bodies are
/// not part of the contract.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token endpoint answered with a non-success, non-429 status.
    #[error("token acquisition failed")]
    TokenAcquisition,

    /// The posts endpoint answered with a non-success, non-429 status.
    #[error("posts fetch failed")]
    PostsFetch,

    /// Every attempt allowed by the retry policy was throttled.
    #[error("rate limit exceeded after {attempts} attempts")]
    RateLimitExceeded { attempts: u32 },

    /// Transport-level failure: connection refused, timeout, malformed body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
