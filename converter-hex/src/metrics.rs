//! Process-wide request and conversion counters.
//!
//! A passive sink: the service and the transport layer increment counters,
//! and the `/metrics` endpoint renders them in Prometheus text exposition
//! format at scrape time. The cache size gauge is sampled from the cache on
//! each render rather than tracked here.

use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrency-safe counters for the whole process.
///
/// Lifetime equals the process lifetime; reset only by restart.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    requests_success: AtomicU64,
    requests_error: AtomicU64,
    conversions_total: AtomicU64,
}

/// Point-in-time view of the counters, for tests and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_success: u64,
    pub requests_error: u64,
    pub conversions_total: u64,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed HTTP request, tagged by outcome.
    pub fn record_request(&self, success: bool) {
        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a successful conversion, identity conversions included.
    pub fn record_conversion(&self) {
        self.conversions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Current counter values.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_success: self.requests_success.load(Ordering::Relaxed),
            requests_error: self.requests_error.load(Ordering::Relaxed),
            conversions_total: self.conversions_total.load(Ordering::Relaxed),
        }
    }

    /// Renders the Prometheus text exposition, sampling `cache_size` from
    /// the rate cache at scrape time.
    pub fn render(&self, cache_size: usize) -> String {
        let snap = self.snapshot();
        format!(
            "# HELP http_requests_total Total number of HTTP requests.\n\
             # TYPE http_requests_total counter\n\
             http_requests_total{{outcome=\"success\"}} {}\n\
             http_requests_total{{outcome=\"error\"}} {}\n\
             \n\
             # HELP currency_conversions_total Total number of currency conversions.\n\
             # TYPE currency_conversions_total counter\n\
             currency_conversions_total {}\n\
             \n\
             # HELP exchange_cache_size Current number of cached exchange rates.\n\
             # TYPE exchange_cache_size gauge\n\
             exchange_cache_size {}\n",
            snap.requests_success, snap.requests_error, snap.conversions_total, cache_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = MetricsRecorder::new();
        metrics.record_request(true);
        metrics.record_request(true);
        metrics.record_request(false);
        metrics.record_conversion();

        let snap = metrics.snapshot();
        assert_eq!(snap.requests_success, 2);
        assert_eq!(snap.requests_error, 1);
        assert_eq!(snap.conversions_total, 1);
    }

    #[test]
    fn test_render_exposition_format() {
        let metrics = MetricsRecorder::new();
        metrics.record_conversion();

        let text = metrics.render(3);
        assert!(text.contains("# TYPE currency_conversions_total counter"));
        assert!(text.contains("currency_conversions_total 1"));
        assert!(text.contains("exchange_cache_size 3"));
        assert!(text.contains("http_requests_total{outcome=\"success\"} 0"));
    }
}
