//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics keyed by verdict `(status, subcode)` and
//! rendered in Prometheus text format by whatever `/metrics` handler the
//! embedding service exposes.

pub mod metrics;

pub use metrics::GateMetrics;
