use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::error::ApiError;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// How throttled requests are retried.
///
/// Only 429 responses are retried; any other status is returned to the caller
/// as-is. Each 429 is followed by exactly one delayed re-attempt, up to
/// `max_attempts` requests in total.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of requests per call, counting the first one.
    pub max_attempts: u32,
    /// Delay applied when a 429 carries no usable `Retry-After` header.
    pub default_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            default_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Delay requested by a throttled response.
///
/// `Retry-After` is read as an integer number of seconds. A missing or
/// unparsable header falls back to `default_delay`.
pub fn retry_after_delay(headers: &HeaderMap, default_delay: Duration) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default_delay)
}

/// Send a request, sleeping and re-sending whenever the server answers 429.
///
/// `build_request` is invoked once per attempt since a `RequestBuilder` is
/// consumed by `send`. A `max_attempts` of zero is treated as one.
pub(crate) async fn send_with_retry<F>(
    build_request: F,
    policy: &RetryPolicy,
) -> Result<Response, ApiError>
where
    F: Fn() -> RequestBuilder,
{
    let max_attempts = policy.max_attempts.max(1);
    for attempt in 1..=max_attempts {
        let response = build_request().send().await?;
        if response.status() != StatusCode::TOO_MANY_REQUESTS {
            return Ok(response);
        }
        if attempt == max_attempts {
            break;
        }
        let delay = retry_after_delay(response.headers(), policy.default_delay);
        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            "Request throttled, retrying after delay"
        );
        tokio::time::sleep(delay).await;
    }
    Err(ApiError::RateLimitExceeded {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    const DEFAULT: Duration = Duration::from_secs(1);

    fn headers_with_retry_after(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_falls_back_to_default() {
        assert_eq!(retry_after_delay(&HeaderMap::new(), DEFAULT), DEFAULT);
    }

    #[test]
    fn integer_seconds_are_honored() {
        let headers = headers_with_retry_after("2");
        assert_eq!(retry_after_delay(&headers, DEFAULT), Duration::from_secs(2));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let headers = headers_with_retry_after(" 3 ");
        assert_eq!(retry_after_delay(&headers, DEFAULT), Duration::from_secs(3));
    }

    #[test]
    fn non_numeric_header_falls_back_to_default() {
        for value in ["soon", "2.5", "-1", ""] {
            let headers = headers_with_retry_after(value);
            assert_eq!(retry_after_delay(&headers, DEFAULT), DEFAULT, "value {value:?}");
        }
    }

    #[test]
    fn default_policy_allows_five_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.default_delay, Duration::from_secs(1));
    }
}
