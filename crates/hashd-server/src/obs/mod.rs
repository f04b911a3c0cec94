//! Lightweight in-process metrics.
//!
//! The latency histogram is stored in per-outcome locked series and rendered
//! by the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::{HistogramSnapshot, LatencyHistogram, SeriesSnapshot, ServerMetrics};
