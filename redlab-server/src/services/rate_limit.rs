use std::time::{Duration, Instant};

use dashmap::DashMap;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: Instant,
}

/// Fixed-window request counter, keyed by client.
///
/// Every arriving request is counted, including denied ones. A denial never
/// moves the window start; only a fully aged-out window resets it. Repeatedly
/// hammering a throttled endpoint therefore keeps earning denials until the
/// window expires on its own.
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        tracing::info!(
            limit,
            window_secs = window.as_secs(),
            "Rate limiter initialized"
        );
        Self {
            windows: DashMap::new(),
            limit,
            window,
        }
    }

    /// Record one request for `key` and decide whether it may proceed.
    ///
    /// Returns `Err(retry_after_seconds)` when the request exceeds the limit.
    /// The hint is the time left in the current window, floored at one second.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        let now = Instant::now();
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.duration_since(entry.started_at) > self.window {
            entry.count = 0;
            entry.started_at = now;
        }
        entry.count += 1;

        if entry.count > self.limit {
            let elapsed = now.duration_since(entry.started_at);
            let retry_after = self.window.saturating_sub(elapsed).as_secs().max(1);
            tracing::debug!(
                key,
                count = entry.count,
                retry_after,
                "Request denied by rate limiter"
            );
            return Err(retry_after);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_within_the_limit_pass() {
        let limiter = RateLimiter::new(5, Duration::from_secs(10));
        for _ in 0..5 {
            assert!(limiter.check("10.0.0.1").is_ok());
        }
    }

    #[test]
    fn request_over_the_limit_is_denied_with_window_remainder() {
        let limiter = RateLimiter::new(5, Duration::from_secs(10));
        for _ in 0..5 {
            limiter.check("10.0.0.1").unwrap();
        }
        let retry_after = limiter.check("10.0.0.1").unwrap_err();
        assert!((1..=10).contains(&retry_after), "retry_after {retry_after}");
    }

    #[test]
    fn clients_are_counted_separately() {
        let limiter = RateLimiter::new(1, Duration::from_secs(10));
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.2").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());
    }

    #[test]
    fn an_aged_out_window_resets() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());
        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.check("10.0.0.1").is_ok());
    }

    #[test]
    fn denials_do_not_extend_the_window() {
        let limiter = RateLimiter::new(1, Duration::from_millis(80));
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());

        // A mid-window denial must not restart the window: were it restarted
        // here, the check after the second sleep would still be inside it.
        std::thread::sleep(Duration::from_millis(30));
        assert!(limiter.check("10.0.0.1").is_err());
        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.check("10.0.0.1").is_ok());
    }

    #[test]
    fn retry_after_is_floored_at_one_second() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));
        limiter.check("10.0.0.1").unwrap();
        assert_eq!(limiter.check("10.0.0.1").unwrap_err(), 1);
    }
}
