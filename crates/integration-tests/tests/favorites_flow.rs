//! Integration tests for favorites persisted in the session.

use axum::http::StatusCode;
use serde_json::json;

use showcase_integration_tests::{TestClient, demo_app};

#[tokio::test]
async fn test_toggle_returns_updated_button() {
    let mut client = TestClient::new(demo_app());
    let resp = client
        .post_form(
            "/favorites/toggle",
            &[("product_id", "2"), ("product_name", "iPhone 15 Smartphone"), ("favorite", "false")],
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Remove from favorites"));
    assert!(resp.body.contains(r#"name="favorite" value="true""#));
    assert!(resp.body.contains("Remove iPhone 15 Smartphone from favorites"));
}

#[tokio::test]
async fn test_favorite_persists_across_requests() {
    let mut client = TestClient::new(demo_app());
    client
        .post_form("/favorites/toggle", &[("product_id", "2"), ("favorite", "false")])
        .await;

    let grid = client.get("/products/grid").await;
    assert_eq!(grid.body.matches("Remove from favorites").count(), 1);
    assert_eq!(client.get("/api/favorites").await.json(), json!([2]));

    client
        .post_form("/favorites/toggle", &[("product_id", "2"), ("favorite", "true")])
        .await;

    let grid = client.get("/products/grid").await;
    assert!(!grid.body.contains("Remove from favorites"));
    assert_eq!(client.get("/api/favorites").await.json(), json!([]));
}

#[tokio::test]
async fn test_stale_add_is_idempotent() {
    let mut client = TestClient::new(demo_app());

    // Two tabs showing the same "not favorite" button both submit.
    for _ in 0..2 {
        client
            .post_form("/favorites/toggle", &[("product_id", "5"), ("favorite", "false")])
            .await;
    }

    assert_eq!(client.get("/api/favorites").await.json(), json!([5]));
}

#[tokio::test]
async fn test_favorites_keep_insertion_order() {
    let mut client = TestClient::new(demo_app());
    for id in ["3", "1", "5"] {
        client
            .post_form("/favorites/toggle", &[("product_id", id), ("favorite", "false")])
            .await;
    }

    assert_eq!(client.get("/api/favorites").await.json(), json!([3, 1, 5]));
}

#[tokio::test]
async fn test_favorites_ignore_cart() {
    let mut client = TestClient::new(demo_app());
    client
        .post_form("/favorites/toggle", &[("product_id", "1"), ("favorite", "false")])
        .await;

    assert_eq!(client.get("/api/cart").await.json(), json!([]));
}
