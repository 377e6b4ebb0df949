use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, path, status and latency of every request.
///
/// Install with `axum::middleware::from_fn(log_requests)`.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::debug!(%method, %uri, "--> request");

    let response = next.run(request).await;
    let status = response.status();
    let latency = start.elapsed();

    if status.is_server_error() {
        tracing::error!(%method, %uri, status = status.as_u16(), ?latency, "<-- response");
    } else {
        tracing::info!(%method, %uri, status = status.as_u16(), ?latency, "<-- response");
    }
    response
}
