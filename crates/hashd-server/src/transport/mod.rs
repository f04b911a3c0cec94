//! HTTP transport layer: the fingerprint handler and per-request guards.

pub mod guard;
pub mod hash;
pub mod limits;
