//! Per-request metrics + tracing middleware.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;

use crate::app_state::AppState;

/// Records `tally_http_requests_total` and request latency under the matched
/// route template, so `/counters/:name` is one label value for all names.
///
/// Install with `route_layer` so only matched routes are recorded.
pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = req.method().clone();

    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();

    let status = resp.status();
    let metrics = state.metrics();
    metrics.http_requests.inc(&[
        ("route", route.as_str()),
        ("method", method.as_str()),
        ("status", status.as_str()),
    ]);
    metrics
        .request_duration
        .observe(&[("route", route.as_str()), ("method", method.as_str())], elapsed);

    let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    tracing::debug!(%method, %route, status = status.as_u16(), micros, "request");
    resp
}
