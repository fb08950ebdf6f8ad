//! # Converter Providers
//!
//! Outbound adapters implementing the `RateProvider` port:
//!
//! - [`FrankfurterProvider`] - HTTP client for the Frankfurter rate API
//! - [`StaticRateProvider`] - fixed cross-rate table for development and tests

mod frankfurter;
mod static_rates;

pub use frankfurter::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FrankfurterProvider};
pub use static_rates::StaticRateProvider;
