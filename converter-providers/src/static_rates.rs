//! Fixed cross-rate table for development and tests.
//!
//! Each supported currency carries an indicative USD value; the rate for a
//! pair is derived by crossing through USD. No network access, never fails.

use converter_types::{CurrencyCode, ProviderError, RateProvider};

/// Rate provider with hardcoded indicative rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRateProvider;

impl StaticRateProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Indicative USD value of one unit of the given currency.
fn usd_value(code: CurrencyCode) -> f64 {
    match code {
        CurrencyCode::USD => 1.0,
        CurrencyCode::EUR => 1.087,
        CurrencyCode::GBP => 1.266,
        CurrencyCode::JPY => 0.0067,
        CurrencyCode::CAD => 0.73,
        CurrencyCode::AUD => 0.66,
        CurrencyCode::CHF => 1.10,
        CurrencyCode::CNY => 0.14,
        CurrencyCode::INR => 0.01203,
        CurrencyCode::BRL => 0.18,
    }
}

#[async_trait::async_trait]
impl RateProvider for StaticRateProvider {
    async fn fetch_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<f64, ProviderError> {
        Ok(usd_value(from) / usd_value(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_usd_cross_rate() {
        let provider = StaticRateProvider::new();
        let rate = provider
            .fetch_rate(CurrencyCode::EUR, CurrencyCode::USD)
            .await
            .unwrap();
        assert!((rate - 1.087).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_identity_rate_is_one() {
        let provider = StaticRateProvider::new();
        let rate = provider
            .fetch_rate(CurrencyCode::GBP, CurrencyCode::GBP)
            .await
            .unwrap();
        assert_eq!(rate, 1.0);
    }

    #[tokio::test]
    async fn test_inverse_rates_are_reciprocal() {
        let provider = StaticRateProvider::new();
        let eur_usd = provider
            .fetch_rate(CurrencyCode::EUR, CurrencyCode::USD)
            .await
            .unwrap();
        let usd_eur = provider
            .fetch_rate(CurrencyCode::USD, CurrencyCode::EUR)
            .await
            .unwrap();
        assert!((eur_usd * usd_eur - 1.0).abs() < 1e-9);
    }
}
