#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt; // for oneshot

use contador_core::protocol::{ContadorValue, ErrorBody, HealthStatus};
use contador_server::{app_state::AppState, config, router};

fn app() -> Router {
    router::build_router(AppState::new(config::ServiceConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn contador(app: &Router) -> u64 {
    let (status, body) = send(app, Method::GET, "/contador").await;
    assert_eq!(status, StatusCode::OK);
    let v: ContadorValue = serde_json::from_slice(&body).unwrap();
    v.contador
}

#[tokio::test]
async fn healthcheck_is_up() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"status":"UP"}"#);
}

#[tokio::test]
async fn first_contador_is_one() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/contador").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"contador":1}"#);
}

#[tokio::test]
async fn sequential_contador_increments() {
    let app = app();
    assert_eq!(contador(&app).await, 1);
    assert_eq!(contador(&app).await, 2);
    assert_eq!(contador(&app).await, 3);
}

#[tokio::test]
async fn healthcheck_does_not_touch_counter() {
    let app = app();
    assert_eq!(contador(&app).await, 1);
    for _ in 0..3 {
        let (status, body) = send(&app, Method::GET, "/healthcheck").await;
        assert_eq!(status, StatusCode::OK);
        let h: HealthStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(h, HealthStatus::up());
    }
    assert_eq!(contador(&app).await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_contador_values_are_unique() {
    const N: u64 = 100;
    let app = app();

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { contador(&app).await })
        })
        .collect();

    let mut seen = HashSet::new();
    for h in handles {
        let v = h.await.unwrap();
        assert!(seen.insert(v), "duplicate contador value {v}");
    }
    assert_eq!(seen, (1..=N).collect::<HashSet<_>>());
}

#[tokio::test]
async fn separate_states_count_independently() {
    let a = app();
    let b = app();
    assert_eq!(contador(&a).await, 1);
    assert_eq!(contador(&a).await, 2);
    assert_eq!(contador(&b).await, 1);
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(err.error, "NOT_FOUND");
    assert_eq!(err.message, "not found: /nope");
}

#[tokio::test]
async fn post_contador_is_rejected_without_incrementing() {
    let app = app();
    let (status, _) = send(&app, Method::POST, "/contador").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(contador(&app).await, 1);
}

#[tokio::test]
async fn metrics_report_requests_and_value() {
    let app = app();
    contador(&app).await;
    contador(&app).await;
    send(&app, Method::GET, "/healthcheck").await;
    send(&app, Method::GET, "/missing").await;

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "text/plain; version=0.0.4; charset=utf-8"
    );
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert!(text.contains(
        "contador_http_requests_total{method=\"GET\",route=\"/contador\",status=\"200\"} 2"
    ));
    assert!(text.contains(
        "contador_http_requests_total{method=\"GET\",route=\"/healthcheck\",status=\"200\"} 1"
    ));
    assert!(text.contains(
        "contador_http_requests_total{method=\"GET\",route=\"unmatched\",status=\"404\"} 1"
    ));
    assert!(text.contains("contador_value 2"));

    // Scraping is read-only.
    assert_eq!(contador(&app).await, 3);
}

#[tokio::test]
async fn metrics_route_can_be_disabled() {
    let cfg = config::load_from_str("version: 1\nserver:\n  metrics: false\n").unwrap();
    let app = router::build_router(AppState::new(cfg));
    let (status, _) = send(&app, Method::GET, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn head_contador_follows_get_and_increments() {
    let app = app();
    let (status, body) = send(&app, Method::HEAD, "/contador").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(contador(&app).await, 2);
}

#[tokio::test]
async fn extension_methods_share_one_metrics_series() {
    let state = AppState::new(config::ServiceConfig::default());
    let app = router::build_router(state.clone());

    for i in 0..50 {
        let method = Method::from_bytes(format!("JUNK{i}").as_bytes()).unwrap();
        let (status, _) = send(&app, method, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    send(&app, Method::GET, "/healthcheck").await;

    let metrics = state.metrics();
    assert_eq!(
        metrics
            .requests
            .value(&[("method", "other"), ("route", "unmatched"), ("status", "404")]),
        50
    );
    assert_eq!(metrics.request_duration.count(&[("route", "unmatched")]), 50);
    assert_eq!(metrics.request_duration.count(&[("route", "/healthcheck")]), 1);

    let rendered = metrics.render(&[]);
    let series = rendered
        .lines()
        .filter(|l| l.starts_with("contador_http_requests_total{"))
        .count();
    assert_eq!(series, 2);
    assert!(!rendered.contains("JUNK"));
}
