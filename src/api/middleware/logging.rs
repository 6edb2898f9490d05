//! Request logging middleware

use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::header::HeaderValue;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Logs one line when a request arrives and one when it completes.
///
/// No span is opened here: `TraceLayer` already creates the request span,
/// and nesting a second one panics in the tracing registry.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = matched_path(&request);
    let request_id = request_id(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %loggable_headers(&request),
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        request_id = %request_id,
        "Request completed"
    );

    response
}

/// Route template when available, raw path otherwise
fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

/// Caller-provided x-request-id, or a fresh UUID tying the two log lines
/// together
fn request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Render the allowlisted request headers as `name=value` pairs
fn loggable_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str().to_lowercase();
            header_log_value(&name, value).map(|rendered| format!("{}={}", name, rendered))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value to log for a header: skipped entirely, redacted, or verbatim
fn header_log_value(name: &str, value: &HeaderValue) -> Option<String> {
    if !should_log_header(name) {
        return None;
    }

    if is_sensitive_header(name) {
        return Some("[REDACTED]".to_string());
    }

    Some(value.to_str().unwrap_or("[invalid]").to_string())
}

/// Headers whose values are credentials
fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization"
            | "proxy-authorization"
            | "cookie"
            | "set-cookie"
            | "x-auth-token"
            | "x-csrf-token"
            | "x-xsrf-token"
    )
}

/// Headers worth logging at all
fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "authorization"
            | "content-type"
            | "content-length"
            | "accept"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "x-real-ip"
    )
}
