#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use futures_util::stream;
use tower::ServiceExt;

use hashd_core::{digest, Outcome};
use hashd_server::app_state::AppState;
use hashd_server::config::ServerConfig;
use hashd_server::router::build_router;

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn app() -> (AppState, Router) {
    let state = AppState::new(ServerConfig::default());
    let router = build_router(state.clone());
    (state, router)
}

fn req(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn post_abc_returns_sha256() {
    let (state, app) = app();
    let res = app.oneshot(req(Method::POST, "/hash", "abc")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_bytes(res).await, ABC_SHA256.as_bytes());
    assert_eq!(state.metrics().hash_seconds.snapshot().count(Outcome::Ok), 1);
}

#[tokio::test]
async fn post_empty_body_returns_empty_digest() {
    let (_, app) = app();
    let res = app.oneshot(req(Method::POST, "/hash", Body::empty())).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_bytes(res).await, EMPTY_SHA256.as_bytes());
}

#[tokio::test]
async fn get_is_method_not_allowed_and_counted_once() {
    let (state, app) = app();
    let before = state.metrics().hash_seconds.snapshot();
    assert_eq!(before.count(Outcome::MethodNotAllowed), 0);

    let res = app.oneshot(req(Method::GET, "/hash", Body::empty())).await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers().get(header::ALLOW).unwrap(), "POST");
    assert!(body_bytes(res).await.is_empty());

    let after = state.metrics().hash_seconds.snapshot();
    assert_eq!(after.count(Outcome::MethodNotAllowed), 1);
    assert_eq!(after.total_count(), 1);
}

#[tokio::test]
async fn wrong_method_with_body_is_not_hashed() {
    let (state, app) = app();

    let res = app
        .clone()
        .oneshot(req(Method::POST, "/hash", "first"))
        .await
        .unwrap();
    assert_eq!(body_bytes(res).await, digest(b"first").as_bytes());

    for m in [Method::PUT, Method::DELETE, Method::PATCH] {
        let res = app.clone().oneshot(req(m, "/hash", "second")).await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_bytes(res).await;
        assert!(body.is_empty());
        assert_ne!(body, digest(b"second").as_bytes());
    }

    let snap = state.metrics().hash_seconds.snapshot();
    assert_eq!(snap.count(Outcome::Ok), 1);
    assert_eq!(snap.count(Outcome::MethodNotAllowed), 3);
}

#[tokio::test]
async fn body_read_fault_is_internal_error() {
    let (state, app) = app();
    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from_static(b"partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away")),
    ];
    let body = Body::from_stream(stream::iter(chunks));

    let res = app.oneshot(req(Method::POST, "/hash", body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(res).await.is_empty());

    let snap = state.metrics().hash_seconds.snapshot();
    assert_eq!(snap.count(Outcome::InternalError), 1);
    assert_eq!(snap.count(Outcome::Ok), 0);
}

#[tokio::test]
async fn concurrent_requests_get_their_own_digest() {
    const M: usize = 64;
    let (state, app) = app();

    let tasks: Vec<_> = (0..M)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let payload = format!("payload-{i}").repeat(i + 1);
                let res = app
                    .oneshot(req(Method::POST, "/hash", payload.clone()))
                    .await
                    .unwrap();
                assert_eq!(res.status(), StatusCode::OK);
                assert_eq!(body_bytes(res).await, digest(payload.as_bytes()).as_bytes());
            })
        })
        .collect();
    for t in tasks {
        t.await.unwrap();
    }

    let snap = state.metrics().hash_seconds.snapshot();
    assert_eq!(snap.count(Outcome::Ok), M as u64);
    assert_eq!(snap.total_count(), M as u64);
    let ok = snap.get(Outcome::Ok).unwrap();
    assert!(ok.sum >= 0.0);
    assert_eq!(ok.inf_bucket(), M as u64);
}

#[tokio::test]
async fn mixed_concurrent_requests_sum_to_total() {
    let (state, app) = app();

    let tasks: Vec<_> = (0..30)
        .map(|i| {
            let app = app.clone();
            let method = if i % 3 == 0 { Method::GET } else { Method::POST };
            tokio::spawn(async move { app.oneshot(req(method, "/hash", "x")).await.unwrap().status() })
        })
        .collect();
    for t in tasks {
        t.await.unwrap();
    }

    let snap = state.metrics().hash_seconds.snapshot();
    assert_eq!(snap.count(Outcome::MethodNotAllowed), 10);
    assert_eq!(snap.count(Outcome::Ok), 20);
    assert_eq!(snap.total_count(), 30);
}

#[tokio::test]
async fn oversized_head_is_rejected() {
    let state = AppState::new(ServerConfig {
        max_header_bytes: 64,
        ..ServerConfig::default()
    });
    let app = build_router(state.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/hash")
        .header("x-padding", "p".repeat(128))
        .body(Body::from("abc"))
        .unwrap();
    let res = app.oneshot(request).await.unwrap();

    assert_eq!(res.status(), StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE);
    assert_eq!(state.metrics().hash_seconds.snapshot().total_count(), 0);
}

#[tokio::test]
async fn stalled_body_times_out_and_is_recorded_as_fault() {
    let state = AppState::new(ServerConfig {
        timeout: Duration::from_millis(100),
        ..ServerConfig::default()
    });
    let app = build_router(state.clone());
    let body = Body::from_stream(stream::pending::<Result<Bytes, io::Error>>());

    let res = app.oneshot(req(Method::POST, "/hash", body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);

    let snap = state.metrics().hash_seconds.snapshot();
    assert_eq!(snap.count(Outcome::InternalError), 1);
    assert_eq!(snap.count(Outcome::Ok), 0);
    assert_eq!(snap.total_count(), 1);
    assert!(snap.get(Outcome::InternalError).unwrap().sum >= 0.09);
}
