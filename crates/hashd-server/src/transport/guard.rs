//! Observation-on-exit guard.
//!
//! One guard is bound per request. It owns the outcome slot and records the
//! elapsed time under whatever outcome it holds when dropped, which covers
//! early returns, errors, unwinding, and futures cancelled mid-await.

use std::time::Instant;

use axum::http::StatusCode;
use hashd_core::Outcome;

use crate::obs::LatencyHistogram;

pub struct ObserveOnExit<'a> {
    histogram: &'a LatencyHistogram,
    start: Instant,
    outcome: Outcome,
}

impl<'a> ObserveOnExit<'a> {
    /// Start timing with the outcome pre-set to [`Outcome::InternalError`].
    pub fn start(histogram: &'a LatencyHistogram) -> Self {
        Self {
            histogram,
            start: Instant::now(),
            outcome: Outcome::InternalError,
        }
    }

    pub fn set(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    #[cfg(test)]
    fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// HTTP status for the current outcome.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.outcome.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Drop for ObserveOnExit<'_> {
    fn drop(&mut self) {
        self.histogram
            .observe_duration(self.outcome, self.start.elapsed());
    }
}
