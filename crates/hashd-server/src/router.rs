//! Axum router wiring.
//!
//! - `/hash`    : fingerprint endpoint (all methods, gated in the handler)
//! - `/metrics` : latency histogram export

use axum::{
    middleware::from_fn_with_state,
    routing::{any, get},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let timeout = state.cfg().timeout;

    Router::new()
        .route("/hash", any(transport::hash::hash))
        .route("/metrics", get(ops::metrics))
        .layer(from_fn_with_state(state.clone(), transport::limits::max_header_bytes))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
