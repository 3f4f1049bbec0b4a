//! Lightweight in-process request metrics.
//!
//! Metrics are stored as atomics keyed by label set and rendered by the
//! `/metrics` handler in Prometheus text format.

pub mod metrics;
pub mod middleware;

pub use metrics::HttpMetrics;
