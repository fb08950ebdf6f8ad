//! Health snapshot derived from cache state.

use std::sync::Arc;

use chrono::Utc;
use converter_types::HealthStatus;

use crate::cache::RateCache;

/// Derives a health status for the external health endpoint.
pub struct HealthReporter {
    cache: Arc<RateCache>,
}

impl HealthReporter {
    pub fn new(cache: Arc<RateCache>) -> Self {
        Self { cache }
    }

    /// Reports "healthy" whenever the cache answers `size`.
    ///
    /// An empty cache is not degraded - it may simply be cold. Stale entries
    /// count toward `cache_size` until replaced or cleared.
    pub fn report(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            cache_size: self.cache.size(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_types::{CurrencyCode, CurrencyPair};
    use std::time::Duration;

    #[test]
    fn test_cold_cache_is_healthy() {
        let cache = Arc::new(RateCache::new(Duration::from_secs(300)));
        let reporter = HealthReporter::new(cache);

        let status = reporter.report();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.cache_size, 0);
    }

    #[test]
    fn test_report_tracks_cache_size() {
        let cache = Arc::new(RateCache::new(Duration::from_secs(300)));
        cache.put_rate(
            CurrencyPair::new(CurrencyCode::EUR, CurrencyCode::USD),
            1.075,
        );
        let reporter = HealthReporter::new(cache);

        assert_eq!(reporter.report().cache_size, 1);
    }
}
