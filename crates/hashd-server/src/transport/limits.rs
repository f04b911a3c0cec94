//! Request-head size guard.
//!
//! Measures the request head as it appears on the wire (request line,
//! `name: value` header lines, CRLFs) against `max_header_bytes` and answers
//! 431 before the handler runs. Over HTTP/1 hyper's own read buffer limit
//! (about 400 KiB by default) applies first, so with the default 1 MiB
//! setting this guard only fires for smaller configured limits.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

const CRLF: usize = 2;

/// Wire size of the request head: `METHOD SP URI SP VERSION CRLF`, then
/// `name: value CRLF` per header, then the blank line.
pub fn head_len(req: &Request) -> usize {
    let version = format!("{:?}", req.version()).len();
    let line = req.method().as_str().len() + 1 + req.uri().to_string().len() + 1 + version + CRLF;
    let headers = req
        .headers()
        .iter()
        .fold(0, |acc, (k, v)| acc + k.as_str().len() + 2 + v.as_bytes().len() + CRLF);
    line + headers + CRLF
}

pub async fn max_header_bytes(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let limit = app.cfg().max_header_bytes;
    let len = head_len(&req);
    if len > limit {
        tracing::warn!(len, limit, "request head too large");
        return StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE.into_response();
    }
    next.run(req).await
}
