//! Latency histogram keyed by request outcome.
//!
//! Each outcome code owns an independent series behind its own lock inside a
//! `DashMap`, so concurrent requests only contend when they finish with the
//! same code. A sample's count, sum and bucket increments are applied under
//! that lock and are therefore never observed half-written. Buckets are
//! cumulative upper bounds in seconds and fixed at construction.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::Mutex;
use std::time::Duration;

use hashd_core::error::{HashdError, Result};
use hashd_core::Outcome;

/// Default upper bounds in seconds (Prometheus client defaults).
pub const DEFAULT_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Debug)]
struct Series {
    count: u64,
    sum: f64,
    /// `buckets[i]` counts samples `<= bounds[i]`.
    buckets: Vec<u64>,
}

impl Series {
    fn new(n: usize) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            buckets: vec![0; n],
        }
    }
}

/// Point-in-time view of one outcome's distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSnapshot {
    pub outcome: Outcome,
    /// Cumulative counts, one per bound followed by the `+Inf` bucket.
    pub cumulative: Vec<u64>,
    pub sum: f64,
    pub count: u64,
}

impl SeriesSnapshot {
    /// Count in the `+Inf` bucket; always equal to `count`.
    pub fn inf_bucket(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }
}

/// Snapshot of every outcome seen so far, ordered by outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    pub bounds: Vec<f64>,
    pub series: Vec<SeriesSnapshot>,
}

impl HistogramSnapshot {
    pub fn get(&self, outcome: Outcome) -> Option<&SeriesSnapshot> {
        self.series.iter().find(|s| s.outcome == outcome)
    }

    /// Sample count for `outcome`, zero when never observed.
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.get(outcome).map(|s| s.count).unwrap_or(0)
    }

    /// Sample count across all outcomes.
    pub fn total_count(&self) -> u64 {
        self.series.iter().map(|s| s.count).sum()
    }
}

#[derive(Debug)]
pub struct LatencyHistogram {
    bounds: Vec<f64>,
    map: DashMap<Outcome, Mutex<Series>>,
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::with_default_buckets()
    }
}

impl LatencyHistogram {
    /// Histogram over [`DEFAULT_BUCKETS`].
    pub fn with_default_buckets() -> Self {
        Self {
            bounds: DEFAULT_BUCKETS.to_vec(),
            map: DashMap::new(),
        }
    }

    /// Histogram over custom bounds. Bounds must be finite and strictly
    /// increasing.
    pub fn new(bounds: Vec<f64>) -> Result<Self> {
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(HashdError::Config("histogram bounds must be finite".into()));
        }
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(HashdError::Config(
                "histogram bounds must be strictly increasing".into(),
            ));
        }
        Ok(Self {
            bounds,
            map: DashMap::new(),
        })
    }

    /// Record one sample in seconds. Negative or NaN input counts as zero.
    pub fn observe(&self, outcome: Outcome, elapsed_secs: f64) {
        let v = if elapsed_secs > 0.0 { elapsed_secs } else { 0.0 };

        // Shared shard lock on the hot path; exclusive only on first sight.
        if let Some(series) = self.map.get(&outcome) {
            self.record(&series, v);
            return;
        }
        let series = self
            .map
            .entry(outcome)
            .or_insert_with(|| Mutex::new(Series::new(self.bounds.len())));
        self.record(&series, v);
    }

    /// Record one sample from a `Duration`.
    pub fn observe_duration(&self, outcome: Outcome, elapsed: Duration) {
        self.observe(outcome, elapsed.as_secs_f64());
    }

    fn record(&self, series: &Mutex<Series>, v: f64) {
        let mut s = series.lock().unwrap_or_else(|e| e.into_inner());
        s.count += 1;
        s.sum += v;
        // Cumulative buckets: increment every bucket whose bound covers v.
        for (i, &b) in self.bounds.iter().enumerate() {
            if v <= b {
                s.buckets[i] += 1;
            }
        }
    }

    /// Per-outcome consistent snapshot, ordered by outcome.
    pub fn snapshot(&self) -> HistogramSnapshot {
        let mut series: Vec<SeriesSnapshot> = self
            .map
            .iter()
            .map(|r| {
                let s = r.value().lock().unwrap_or_else(|e| e.into_inner());
                let mut cumulative = s.buckets.clone();
                cumulative.push(s.count);
                SeriesSnapshot {
                    outcome: *r.key(),
                    cumulative,
                    sum: s.sum,
                    count: s.count,
                }
            })
            .collect();
        series.sort_by_key(|s| s.outcome);

        HistogramSnapshot {
            bounds: self.bounds.clone(),
            series,
        }
    }

    /// Render in Prometheus text exposition format (unit: seconds).
    pub fn render(&self, name: &str, help: &str, out: &mut String) {
        let snap = self.snapshot();
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for s in &snap.series {
            let code = escape_label(s.outcome.as_str());
            for (le, count) in snap.bounds.iter().zip(&s.cumulative) {
                let _ = writeln!(out, "{}_bucket{{code=\"{}\",le=\"{}\"}} {}", name, code, le, count);
            }
            let _ = writeln!(out, "{}_bucket{{code=\"{}\",le=\"+Inf\"}} {}", name, code, s.inf_bucket());
            let _ = writeln!(out, "{}_sum{{code=\"{}\"}} {}", name, code, s.sum);
            let _ = writeln!(out, "{}_count{{code=\"{}\"}} {}", name, code, s.count);
        }
    }
}

/// Process-wide metrics registry for the server.
#[derive(Debug, Default)]
pub struct ServerMetrics {
    pub hash_seconds: LatencyHistogram,
}

impl ServerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.hash_seconds
            .render("hash_seconds", "Time taken to create hashes", &mut out);
        out
    }
}
