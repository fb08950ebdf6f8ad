//! Domain models for the conversion service.

pub mod conversion;
pub mod currency;

pub use conversion::ConversionResult;
pub use currency::{CurrencyCode, CurrencyPair, UnknownCurrency};
