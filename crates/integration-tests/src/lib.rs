//! Integration test harness for the Showcase storefront.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed:
//!
//! ```bash
//! cargo test -p showcase-integration-tests
//! ```
//!
//! [`TestClient`] behaves like a browser tab: it keeps the session cookie
//! from the first response and sends it on every later request.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use tower::ServiceExt;

use showcase_storefront::catalog::{CatalogProvider, MockCatalog};
use showcase_storefront::config::{LatencyConfig, StorefrontConfig};
use showcase_storefront::middleware::SESSION_COOKIE_NAME;
use showcase_storefront::state::AppState;

/// Largest response body the harness will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Configuration with every artificial delay removed.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        latency: LatencyConfig::none(),
        ..StorefrontConfig::default()
    }
}

/// Router over the five-product demo catalog with no latency.
#[must_use]
pub fn demo_app() -> Router {
    app_with_catalog(MockCatalog::new(Duration::ZERO))
}

/// Router over an explicit catalog provider with no latency.
#[must_use]
pub fn app_with_catalog<C: CatalogProvider + 'static>(catalog: C) -> Router {
    app_with_config(test_config(), catalog)
}

/// Router over an explicit configuration and catalog provider.
#[must_use]
pub fn app_with_config<C: CatalogProvider + 'static>(config: StorefrontConfig, catalog: C) -> Router {
    showcase_storefront::app(AppState::with_catalog(config, Arc::new(catalog)))
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of a response header as a string, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

/// A client bound to one router and one visitor session.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::get(uri), Body::empty()).await
    }

    /// Send a GET request with one extra header.
    pub async fn get_with_header(&mut self, uri: &str, name: &str, value: &str) -> TestResponse {
        self.send(Request::get(uri).header(name, value), Body::empty())
            .await
    }

    /// Send a form-encoded POST request.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        self.send(
            Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
            Body::from(body),
        )
        .await
    }

    /// Whether a session cookie has been issued to this client.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    async fn send(&mut self, builder: axum::http::request::Builder, body: Body) -> TestResponse {
        let builder = match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        };
        let request = builder.body(body).expect("failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("failed to read response body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// The `name=value` pair of the session cookie, if the response set one.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(str::to_string)
}
