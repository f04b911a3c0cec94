//! Fingerprint endpoint.
//!
//! Mounted for every method so that wrong-method requests are classified and
//! timed here rather than rejected by the router.

use axum::{
    body::Body,
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use hashd_core::error::{HashdError, Result};
use hashd_core::{digest, is_accepted_method, Outcome, ACCEPTED_METHOD};

use crate::app_state::AppState;
use crate::transport::guard::ObserveOnExit;

pub async fn hash(State(app): State<AppState>, method: Method, body: Body) -> Response {
    let metrics = app.metrics();
    let mut outcome = ObserveOnExit::start(&metrics.hash_seconds);

    if !is_accepted_method(method.as_str()) {
        outcome.set(Outcome::MethodNotAllowed);
        return (outcome.status(), [(header::ALLOW, ACCEPTED_METHOD)]).into_response();
    }

    let payload = match read_body(body).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(error = %e, "hash request aborted");
            return outcome.status().into_response();
        }
    };

    let sum = digest(&payload);
    tracing::debug!(len = payload.len(), digest = %sum, "payload hashed");

    outcome.set(Outcome::classify(method.as_str(), true));
    (outcome.status(), sum).into_response()
}

/// Read the whole body; the transport is the only size bound.
async fn read_body(body: Body) -> Result<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| HashdError::BodyRead(e.to_string()))
}
