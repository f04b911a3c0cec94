//! Shared error type across hashd crates.

use std::net::SocketAddr;

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, HashdError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HashdError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("body read failed: {0}")]
    BodyRead(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
