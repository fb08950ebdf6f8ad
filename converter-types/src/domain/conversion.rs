//! The result of a single conversion request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CurrencyCode;

/// A completed conversion.
///
/// Created per request, immutable, returned to the caller; never stored.
/// The `rate` is the unrounded provider rate; only `converted_amount` is
/// rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Requested amount in the `from` currency
    #[schema(example = 100.0)]
    pub amount: f64,
    /// Converted amount, rounded to 2 decimal places
    #[schema(example = 107.50)]
    pub converted_amount: f64,
    /// Exchange rate applied (unrounded)
    #[schema(example = 1.075)]
    pub rate: f64,
    /// When the conversion was computed (ISO 8601)
    pub timestamp: DateTime<Utc>,
    /// Trace identifier attached by the transport layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ConversionResult {
    /// Attaches a trace identifier for request correlation.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}
