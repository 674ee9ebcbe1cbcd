//! Request/response logging middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

use crate::extractors::device::TENANT_HEADER;

/// Logs method, path, status, and duration for every request.
///
/// Ingestion requests carry the tenant id as a header, so it is logged here
/// too; dashboard requests log it at the service layer after the bearer
/// token has been resolved.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let tenant = request
        .headers()
        .get(TENANT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        path = %uri.path(),
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        tenant = tenant.as_deref().unwrap_or("-"),
        "HTTP request"
    );

    response
}
