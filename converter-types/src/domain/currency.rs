//! Supported currencies and the ordered pair used as the cache key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Currencies supported by the conversion service.
///
/// Codes outside this set are rejected before any cache or provider
/// interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    INR,
    BRL,
}

impl CurrencyCode {
    /// Returns the 3-letter ISO code.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::CHF => "CHF",
            CurrencyCode::CNY => "CNY",
            CurrencyCode::INR => "INR",
            CurrencyCode::BRL => "BRL",
        }
    }

    /// All supported currencies.
    pub fn all() -> &'static [CurrencyCode] {
        &[
            CurrencyCode::USD,
            CurrencyCode::EUR,
            CurrencyCode::GBP,
            CurrencyCode::JPY,
            CurrencyCode::CAD,
            CurrencyCode::AUD,
            CurrencyCode::CHF,
            CurrencyCode::CNY,
            CurrencyCode::INR,
            CurrencyCode::BRL,
        ]
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when parsing an unsupported currency code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsupported currency: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::USD),
            "EUR" => Ok(CurrencyCode::EUR),
            "GBP" => Ok(CurrencyCode::GBP),
            "JPY" => Ok(CurrencyCode::JPY),
            "CAD" => Ok(CurrencyCode::CAD),
            "AUD" => Ok(CurrencyCode::AUD),
            "CHF" => Ok(CurrencyCode::CHF),
            "CNY" => Ok(CurrencyCode::CNY),
            "INR" => Ok(CurrencyCode::INR),
            "BRL" => Ok(CurrencyCode::BRL),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// Ordered (base, quote) pair identifying a conversion direction.
///
/// Used as the rate cache key. A pair with `base == quote` is valid but
/// trivial (rate 1) and never reaches the cache or provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    /// Creates a new ordered pair.
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }

    /// Returns true for the trivial base == quote case.
    pub fn is_identity(&self) -> bool {
        self.base == self.quote
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
