//! Request correlation IDs.
//!
//! Each request carries an `x-request-id`: the one set by an upstream proxy
//! when present and usable, otherwise a fresh UUID v4. The ID lands on the
//! request's tracing span, on the Sentry scope, and on the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID that is trusted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Pick the request ID for an incoming request.
///
/// Upstream IDs that are empty, not visible ASCII, or overly long are replaced.
#[must_use]
pub fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that tags every request and response with a request ID.
///
/// The surrounding `TraceLayer` span declares an empty `request_id` field,
/// which is filled in here.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
