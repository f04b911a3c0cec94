//! hashd server library entry.
//!
//! Wires config, the fingerprint handler, latency metrics, and the router
//! into a servable axum stack. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod transport;
