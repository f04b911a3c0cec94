//! Server config loader (environment based).

pub mod schema;

use hashd_core::error::{HashdError, Result};

pub use schema::ServerConfig;

/// Environment variable naming the listen port.
pub const PORT_ENV: &str = "port";

pub fn load_from_env() -> Result<ServerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary lookup. Unset or empty `port` falls back to
/// the default.
pub fn load_with<F>(lookup: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = ServerConfig::default();
    if let Some(raw) = lookup(PORT_ENV) {
        let raw = raw.trim();
        if !raw.is_empty() {
            cfg.port = raw
                .parse()
                .map_err(|e| HashdError::Config(format!("{PORT_ENV}={raw:?}: {e}")))?;
        }
    }
    cfg.validate()?;
    Ok(cfg)
}
