//! Crate configuration

use std::time::Duration;

/// Default OpenF1 API base URL.
pub const OPENF1_BASE_URL: &str = "https://api.openf1.org/v1";

/// Configuration for the timing client and response cache.
///
/// The cache TTL is operator tunable on a minutes-to-hours scale; timing
/// data for completed sessions is effectively immutable, so longer TTLs
/// only trade staleness during live sessions for fewer upstream requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddockConfig {
    /// Base URL of the timing API
    pub base_url: String,
    /// Per-request timeout for upstream fetches
    pub request_timeout: Duration,
    /// Default time-to-live for memoized responses
    pub cache_ttl: Duration,
}

impl Default for PaddockConfig {
    fn default() -> Self {
        Self {
            base_url: OPENF1_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(10 * 60),
        }
    }
}

impl PaddockConfig {
    /// Override the API base URL (e.g. for a mirror or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the response cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
