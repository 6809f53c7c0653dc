//! End-to-end shopping scenario over the stores and the demo catalog,
//! backed by in-memory storage instead of a session.

use std::time::Duration;

use showcase_core::{CartEntry, ProductId};
use showcase_storefront::catalog::{CatalogProvider, MockCatalog};
use showcase_storefront::services::{CartError, CartStore, FavoritesStore};
use showcase_storefront::storage::{KeyValueStore, MemoryStorage, keys};

async fn product(catalog: &MockCatalog, id: i32) -> showcase_core::Product {
    catalog
        .fetch_product_by_id(ProductId::new(id))
        .await
        .expect("catalog fetch")
        .expect("product exists")
}

#[tokio::test]
async fn test_demo_scenario() {
    let catalog = MockCatalog::new(Duration::ZERO);
    let storage = MemoryStorage::new();
    let cart = CartStore::new(storage.clone());
    let favorites = FavoritesStore::new(storage.clone());

    let products = catalog.fetch_products().await.expect("catalog fetch");
    assert_eq!(products.len(), 5);
    assert_eq!(products.iter().filter(|p| p.in_stock).count(), 4);

    // Out-of-stock add is rejected and nothing is written.
    let ipad = product(&catalog, 4).await;
    let result = cart.add_to_cart(&ipad, 1).await;
    assert!(matches!(result, Err(CartError::Unavailable { .. })));
    assert!(cart.load().await.expect("load").is_empty());
    assert_eq!(storage.get(keys::CART).await.expect("get"), None);

    // Two adds of the same product merge.
    let macbook = product(&catalog, 1).await;
    cart.add_to_cart(&macbook, 2).await.expect("first add");
    let merged = cart.add_to_cart(&macbook, 3).await.expect("second add");
    assert_eq!(
        merged.entries(),
        &[CartEntry {
            product_id: ProductId::new(1),
            quantity: 5,
        }]
    );

    // A fresh store over the same storage sees the persisted cart.
    let reloaded = CartStore::new(storage.clone()).load().await.expect("reload");
    assert_eq!(reloaded, merged);

    // Favorites toggle on, then off.
    let phone = ProductId::new(2);
    let now = favorites.toggle_favorite(phone, false).await.expect("toggle on");
    assert!(now);
    assert!(favorites.is_favorite(phone).await.expect("read"));

    let now = favorites.toggle_favorite(phone, true).await.expect("toggle off");
    assert!(!now);
    assert!(!favorites.is_favorite(phone).await.expect("read"));

    // Favorites never touched the cart.
    assert_eq!(cart.item_count().await.expect("count"), 5);
}

#[tokio::test]
async fn test_corrupt_blobs_read_as_empty() {
    let storage = MemoryStorage::new();
    storage
        .set(keys::CART, "not json".to_string())
        .await
        .expect("set");
    storage
        .set(keys::FAVORITES, r#"{"oops": true}"#.to_string())
        .await
        .expect("set");

    let cart = CartStore::new(storage.clone());
    let favorites = FavoritesStore::new(storage.clone());

    assert!(cart.load().await.expect("load").is_empty());
    assert!(favorites.load().await.expect("load").is_empty());
    assert!(!favorites.is_favorite(ProductId::new(1)).await.expect("read"));
}
