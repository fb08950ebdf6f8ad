//! Exchange rate provider port.
//!
//! This trait defines the interface for external rate sources.
//! Implementations can be HTTP clients, static tables, mocks, etc.

use crate::domain::CurrencyCode;
use crate::error::ProviderError;

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the current exchange rate from one currency to another.
    /// Returns how many units of `to` currency one unit of `from` buys.
    ///
    /// May be slow or fail; callers are expected to bound the call with a
    /// timeout at the adapter level.
    async fn fetch_rate(&self, from: CurrencyCode, to: CurrencyCode)
    -> Result<f64, ProviderError>;
}
