//! Prometheus metrics: request middleware and scrape endpoint
//!
//! Records `http_requests_total` (counter) and
//! `http_request_duration_seconds` (histogram) for every request.

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;

/// Label used for requests that matched no route, so that arbitrary
/// paths cannot grow the label set.
const UNMATCHED_PATH: &str = "unmatched";

/// Shared state for the metrics endpoint
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

/// Middleware recording request count and latency, labelled by the route
/// template (`/users/{id}`), not the concrete URI.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();
    metrics::counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(elapsed);

    response
}

/// `GET /metrics`: Prometheus text exposition
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.handle.render(),
    )
}
