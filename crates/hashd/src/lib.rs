//! Top-level facade crate for hashd.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use hashd_core::*;
}

pub mod server {
    pub use hashd_server::*;
}
