//! Integration tests for the catalog pages and JSON API.

use std::time::Duration;

use axum::http::StatusCode;

use showcase_core::{Price, Product, ProductId};
use showcase_integration_tests::{TestClient, app_with_catalog, demo_app};
use showcase_storefront::catalog::MockCatalog;
use showcase_storefront::middleware::REQUEST_ID_HEADER;

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new(demo_app());
    let resp = client.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_home_renders_loading_fallback() {
    let mut client = TestClient::new(demo_app());
    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Loading products..."));
    assert!(resp.body.contains(r#"hx-get="/products/grid""#));
    assert!(resp.body.contains(r#"hx-get="/cart/count""#));
}

#[tokio::test]
async fn test_home_does_not_wait_for_catalog() {
    let mut client = TestClient::new(app_with_catalog(MockCatalog::failing(Duration::ZERO)));
    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.body.contains("Failed to load products"));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let mut client = TestClient::new(demo_app());
    let resp = client.get("/static/main.css").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains(".product-grid"));
}

#[tokio::test]
async fn test_request_id_echoed() {
    let mut client = TestClient::new(demo_app());

    let resp = client.get("/health").await;
    assert!(resp.header(REQUEST_ID_HEADER).is_some_and(|id| !id.is_empty()));

    let resp = client
        .get_with_header("/health", REQUEST_ID_HEADER, "edge-42")
        .await;
    assert_eq!(resp.header(REQUEST_ID_HEADER), Some("edge-42"));
}

// ============================================================================
// Product Grid
// ============================================================================

#[tokio::test]
async fn test_grid_lists_demo_catalog() {
    let mut client = TestClient::new(demo_app());
    let resp = client.get("/products/grid").await;

    assert_eq!(resp.status, StatusCode::OK);
    for name in ["MacBook Pro", "iPhone 15", "AirPods Pro", "iPad Air", "Apple Watch"] {
        assert!(resp.body.contains(name), "grid is missing {name}");
    }
    for id in 1..=5 {
        assert!(resp.body.contains(&format!(r#"id="cart-control-{id}""#)));
    }
    assert!(resp.body.contains("89,999.00"));
    assert_eq!(resp.body.matches("Out of stock").count(), 2, "badge and button for id 4");
    assert!(resp.body.contains("Add to favorites"));
    assert!(!resp.body.contains("Remove from favorites"));
}

#[tokio::test]
async fn test_grid_catalog_failure_renders_error_state() {
    let mut client = TestClient::new(app_with_catalog(MockCatalog::failing(Duration::ZERO)));
    let resp = client.get("/products/grid").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Failed to load products. Please try again later."));
    assert!(!resp.body.contains("No products found"));
}

#[tokio::test]
async fn test_grid_empty_catalog_renders_empty_state() {
    let mut client = TestClient::new(app_with_catalog(MockCatalog::empty(Duration::ZERO)));
    let resp = client.get("/products/grid").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("No products found"));
    assert!(!resp.body.contains("Failed to load products"));
}

#[tokio::test]
async fn test_grid_escapes_product_text() {
    let product = Product {
        id: ProductId::new(9),
        name: "<script>alert(1)</script>".to_string(),
        description: "Fish & Chips".to_string(),
        price: Price::from_units(5),
        image: "https://example.com/9.jpg".to_string(),
        category: "Food".to_string(),
        in_stock: true,
    };
    let mut client = TestClient::new(app_with_catalog(MockCatalog::with_products(
        vec![product],
        Duration::ZERO,
    )));
    let resp = client.get("/products/grid").await;

    assert!(!resp.body.contains("<script>alert(1)</script>"));
    assert!(resp.body.contains("&lt;script&gt;"));
    assert!(resp.body.contains("Fish &amp; Chips"));
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_products_wire_shape() {
    let mut client = TestClient::new(demo_app());
    let resp = client.get("/api/products").await;

    assert_eq!(resp.status, StatusCode::OK);
    let products = resp.json();
    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 5);

    let ipad = products.iter().find(|p| p["id"] == 4).expect("product 4");
    assert_eq!(ipad["inStock"], false);
    assert_eq!(ipad["price"].as_f64(), Some(32_999.0));
    assert!(ipad["image"].as_str().is_some_and(|url| url.starts_with("https://")));
}

#[tokio::test]
async fn test_api_product_by_id() {
    let mut client = TestClient::new(demo_app());

    let resp = client.get("/api/products/2").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["name"], "iPhone 15 Smartphone");

    let resp = client.get("/api/products/99").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_products_catalog_failure() {
    let mut client = TestClient::new(app_with_catalog(MockCatalog::failing(Duration::ZERO)));
    let resp = client.get("/api/products").await;

    assert_eq!(resp.status, StatusCode::BAD_GATEWAY);
}
