//! Per-domain request pacing.

use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Jitter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::time::Duration;
use url::Url;

/// Pacing policy applied before each request: a base delay between requests
/// to the same domain, plus a random jitter window so request timing does not
/// form a detectable pattern.
pub struct DomainLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    jitter: Jitter,
}

impl DomainLimiter {
    /// Create a limiter enforcing `delay` between requests to one domain and
    /// up to `random_delay` of extra jitter per request.
    pub fn new(delay: Duration, random_delay: Duration) -> Self {
        let quota = Quota::with_period(delay)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::new(1).unwrap()));

        Self {
            limiter: RateLimiter::keyed(quota),
            jitter: Jitter::up_to(random_delay),
        }
    }

    /// Wait until a request to `url`'s domain may proceed. The first request
    /// to a domain passes immediately.
    pub async fn acquire(&self, url: &str) {
        let domain = domain_of(url);
        self.limiter
            .until_key_ready_with_jitter(&domain, self.jitter)
            .await;
    }
}

/// Domain key for a request URL. Unparseable URLs share the empty key.
fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_key_is_the_host() {
        assert_eq!(domain_of("https://www.anothermag.com/page"), "www.anothermag.com");
        assert_eq!(domain_of("http://127.0.0.1:8080/"), "127.0.0.1");
        assert_eq!(domain_of("not a url"), "");
    }

    #[test]
    fn first_acquire_passes_immediately() {
        let limiter = DomainLimiter::new(Duration::from_secs(60), Duration::from_millis(1));
        tokio_test::block_on(limiter.acquire("http://example.com/"));
    }
}
