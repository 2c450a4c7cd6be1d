//! Logging middleware

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Log one line per request with method, path, status and latency.
///
/// Server errors log at `warn`; 404s on unknown users are routine and stay at `info`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);
    let query = query.as_deref().unwrap_or("");

    if response.status().is_server_error() {
        warn!(%method, %path, query, status, %duration_ms, "Request failed");
    } else {
        info!(%method, %path, query, status, %duration_ms, "Request completed");
    }

    response
}
