//! TTL-bounded in-memory rate cache.
//!
//! Expiry is lazy: an expired entry is skipped on read but stays in the map
//! until a refresh overwrites it or `clear` removes it, so `size` counts
//! stale entries too. There is no background sweeper; the map is bounded by
//! |supported currencies|² entries.

use std::time::{Duration, Instant};

use converter_types::CurrencyPair;
use dashmap::DashMap;

/// A cached rate and the moment it was fetched.
#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: f64,
    fetched_at: Instant,
}

/// Thread-safe mapping from currency pair to cached rate.
///
/// Created once at startup and shared across all request handlers. The TTL
/// is a fixed configuration value, not per-entry.
pub struct RateCache {
    entries: DashMap<CurrencyPair, CachedRate>,
    ttl: Duration,
}

impl RateCache {
    /// Creates a cache whose entries are fresh for `ttl` after each write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached rate for `pair` if present and still fresh.
    ///
    /// Fetching on a miss is the caller's responsibility; the cache itself
    /// performs no network calls.
    pub fn get_rate(&self, pair: &CurrencyPair) -> Option<f64> {
        let entry = self.entries.get(pair)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.rate)
        } else {
            // Lazy expiry: the stale entry is kept until replaced or cleared.
            None
        }
    }

    /// Inserts or overwrites the entry for `pair`, stamping the current time.
    ///
    /// Identity pairs are never stored; the service answers those upstream
    /// with rate 1.
    pub fn put_rate(&self, pair: CurrencyPair, rate: f64) {
        if pair.is_identity() {
            return;
        }
        self.entries.insert(
            pair,
            CachedRate {
                rate,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Empties the mapping. Idempotent.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of live entries, stale ones included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }
}
