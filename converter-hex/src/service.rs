//! Conversion Application Service
//!
//! Orchestrates the rate cache and the provider port to answer
//! "convert amount A of currency X into currency Y".
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use chrono::Utc;
use converter_types::{
    ConversionResult, ConvertError, CurrencyCode, CurrencyPair, RateProvider, UnknownCurrency,
};

use crate::cache::RateCache;
use crate::metrics::MetricsRecorder;

/// Application service for conversion operations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with a mock provider
/// - Compile-time checks for port implementation
pub struct ConversionService<P: RateProvider> {
    provider: P,
    cache: Arc<RateCache>,
    metrics: Arc<MetricsRecorder>,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service over the given provider.
    pub fn new(provider: P, cache: Arc<RateCache>, metrics: Arc<MetricsRecorder>) -> Self {
        Self {
            provider,
            cache,
            metrics,
        }
    }

    /// Converts `amount` of currency `from` into currency `to`.
    ///
    /// Validation happens before any cache or provider interaction. The
    /// identity case (`from == to`) bypasses both and still counts as a
    /// conversion. On provider failure the cache is left unmodified.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, ConvertError> {
        let from: CurrencyCode = from.parse().map_err(invalid_currency)?;
        let to: CurrencyCode = to.parse().map_err(invalid_currency)?;

        if !amount.is_finite() {
            return Err(ConvertError::InvalidInput(
                "Amount must be a finite number".into(),
            ));
        }
        if amount < 0.0 {
            return Err(ConvertError::InvalidInput(
                format!("Amount must be non-negative, got {amount}"),
            ));
        }

        let rate = if from == to {
            1.0
        } else {
            self.lookup_rate(CurrencyPair::new(from, to)).await?
        };

        let converted_amount = round_display(amount * rate);
        self.metrics.record_conversion();

        Ok(ConversionResult {
            from,
            to,
            amount,
            converted_amount,
            rate,
            timestamp: Utc::now(),
            trace_id: None,
        })
    }

    /// Returns a fresh rate for `pair`, consulting the cache first.
    ///
    /// No single-flight deduplication: concurrent misses for the same pair
    /// each fetch independently and the last writer wins.
    async fn lookup_rate(&self, pair: CurrencyPair) -> Result<f64, ConvertError> {
        if let Some(rate) = self.cache.get_rate(&pair) {
            return Ok(rate);
        }

        let rate = self.provider.fetch_rate(pair.base, pair.quote).await?;
        self.cache.put_rate(pair, rate);
        Ok(rate)
    }
}

fn invalid_currency(err: UnknownCurrency) -> ConvertError {
    ConvertError::InvalidInput(err.to_string())
}

/// Rounds half away from zero to 2 decimal places for display consistency.
/// The rate itself is returned unrounded.
fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round_display;

    #[test]
    fn test_round_display_two_places() {
        assert_eq!(round_display(107.504), 107.5);
        assert_eq!(round_display(107.506), 107.51);
        assert_eq!(round_display(0.0), 0.0);
    }
}
