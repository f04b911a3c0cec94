use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use hashd_core::error::{HashdError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Applied to both reading the request and writing the response.
    pub timeout: Duration,
    pub max_header_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            timeout: default_timeout(),
            max_header_bytes: default_max_header_bytes(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(HashdError::Config("timeout must be non-zero".into()));
        }
        if self.max_header_bytes == 0 {
            return Err(HashdError::Config("max_header_bytes must be non-zero".into()));
        }
        Ok(())
    }

    /// Listen on all interfaces at the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn default_port() -> u16 {
    8080
}
fn default_timeout() -> Duration {
    Duration::from_secs(8)
}
fn default_max_header_bytes() -> usize {
    1 << 20
}
