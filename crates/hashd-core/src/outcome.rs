//! Outcome classification for fingerprint requests.
//!
//! Every request ends in exactly one of a small closed set of outcomes. The
//! handler starts from [`Outcome::InternalError`] and overwrites it as it
//! reaches a terminal state, so anything that escapes before then is counted
//! as a fault.

use std::fmt;

/// The only method allowed to submit payloads.
pub const ACCEPTED_METHOD: &str = "POST";

/// Returns true when `method` may submit a payload for hashing.
pub fn is_accepted_method(method: &str) -> bool {
    method == ACCEPTED_METHOD
}

/// Terminal disposition of one request (stable label set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Body read and digest written.
    Ok,
    /// Method other than [`ACCEPTED_METHOD`]; the body was never read.
    MethodNotAllowed,
    /// Processing did not reach a terminal success state.
    InternalError,
}

impl Outcome {
    /// Classify a request from its method and whether processing completed.
    pub fn classify(method: &str, completed: bool) -> Self {
        if !is_accepted_method(method) {
            Outcome::MethodNotAllowed
        } else if completed {
            Outcome::Ok
        } else {
            Outcome::InternalError
        }
    }

    /// Numeric HTTP status for this outcome.
    pub fn code(self) -> u16 {
        match self {
            Outcome::Ok => 200,
            Outcome::MethodNotAllowed => 405,
            Outcome::InternalError => 500,
        }
    }

    /// Label used in metrics (`code="..."`).
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "200",
            Outcome::MethodNotAllowed => "405",
            Outcome::InternalError => "500",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
