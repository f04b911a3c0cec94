//! hashd core: the fingerprint function, outcome classification, and the
//! shared error type.
//!
//! This crate is transport-agnostic. It carries no runtime or HTTP
//! dependencies so the digest and classification rules can be reused by the
//! server, tests, and any offline tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod digest;
pub mod error;
pub mod outcome;

/// Shared result type.
pub use error::{HashdError, Result};
pub use digest::digest;
pub use outcome::{is_accepted_method, Outcome, ACCEPTED_METHOD};
