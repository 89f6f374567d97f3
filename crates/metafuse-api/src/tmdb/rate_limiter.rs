//! TMDB API rate limiter.

use std::time::{Duration, Instant};

/// Default minimum interval between requests (~40 req/s).
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Simple single-tier rate limiter for TMDB API.
///
/// TMDB enforces roughly 40 requests per second. This limiter
/// ensures a minimum interval between consecutive requests.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbRateLimiter {
    /// Minimum interval between requests.
    min_interval: Duration,
    /// Last request timestamp.
    last_request: Option<Instant>,
}

impl TmdbRateLimiter {
    /// Creates a new rate limiter with the given minimum interval.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Creates a new rate limiter with the default interval (25ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Waits until the next request is allowed.
    pub async fn wait(&mut self) {
        let now = Instant::now();

        if let Some(last) = self.last_request {
            let elapsed = now.duration_since(last);
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval.saturating_sub(elapsed)).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}
