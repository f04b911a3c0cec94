//! hashd server
//!
//! - `POST /hash`   : SHA-256 hex digest of the request body
//! - `GET /metrics` : request latency histogram by status code
//! - Port from the `port` environment variable (default 8080)

use tracing_subscriber::{fmt, EnvFilter};

use hashd_server::{app_state, config, server};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            std::process::exit(1);
        }
    };

    let state = app_state::AppState::new(cfg);
    if let Err(e) = server::run(state, server::shutdown_signal()).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
