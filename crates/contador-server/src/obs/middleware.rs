//! Per-request accounting: one counter tick and one latency sample per request.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Route label for requests no route matched (keeps label cardinality bounded).
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Method label for anything outside the standard verbs.
pub const OTHER_METHOD: &str = "other";

fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        "OPTIONS" => "OPTIONS",
        _ => OTHER_METHOD,
    }
}

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    let method = method_label(req.method());

    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();

    let status = resp.status();
    let metrics = state.metrics();
    metrics.requests.inc(&[
        ("method", method),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    metrics
        .request_duration
        .observe(&[("route", route.as_str())], elapsed);

    tracing::trace!(%method, %route, status = status.as_u16(), ?elapsed, "request served");
    resp
}
