//! # Converter Hex
//!
//! Application service layer and HTTP adapter for the conversion service.
//!
//! ## Architecture
//!
//! - `cache` - TTL-bounded in-memory rate cache
//! - `service` - Application service (orchestrates cache + provider)
//! - `metrics` - Process-wide counters with Prometheus text exposition
//! - `health` - Health snapshot derived from cache state
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider`, allowing different
//! provider implementations to be injected.

pub mod cache;
pub mod health;
pub mod inbound;
pub mod metrics;
mod openapi;
pub mod service;


pub use cache::RateCache;
pub use health::HealthReporter;
pub use metrics::{MetricsRecorder, MetricsSnapshot};
pub use service::ConversionService;
