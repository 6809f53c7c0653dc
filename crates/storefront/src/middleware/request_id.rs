//! Per-request correlation IDs.
//!
//! Every request gets a [`RequestId`]: the caller's `x-request-id` when it is
//! short printable ASCII, a fresh UUID v4 otherwise. The ID is stored as a
//! request extension, recorded on the request span, tagged on the Sentry
//! scope, and echoed in the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied ID that is accepted as is.
const MAX_UPSTREAM_LEN: usize = 128;

/// Correlation ID for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Accept a caller-supplied ID, or `None` if it is empty, too long or
    /// contains anything but visible ASCII.
    #[must_use]
    pub fn from_upstream(value: &str) -> Option<Self> {
        let valid = !value.is_empty()
            && value.len() <= MAX_UPSTREAM_LEN
            && value.bytes().all(|b| b.is_ascii_graphic());
        valid.then(|| Self(value.to_string()))
    }

    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware that assigns a [`RequestId`] to every request.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(RequestId::from_upstream)
        .unwrap_or_else(RequestId::generate);

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", request_id.as_str());
    });

    request.extensions_mut().insert(request_id.clone());
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_accepted() {
        let id = RequestId::from_upstream("cf-ray-8a1b2c3d");
        assert_eq!(id.as_ref().map(RequestId::as_str), Some("cf-ray-8a1b2c3d"));
    }

    #[test]
    fn test_bad_upstream_ids_rejected() {
        assert!(RequestId::from_upstream("").is_none());
        assert!(RequestId::from_upstream("has space").is_none());
        assert!(RequestId::from_upstream(&"x".repeat(MAX_UPSTREAM_LEN + 1)).is_none());
    }

    #[test]
    fn test_generated_ids_are_uuids() {
        let id = RequestId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, RequestId::generate());
    }
}
