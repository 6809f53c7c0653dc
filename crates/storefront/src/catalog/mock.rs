//! In-memory catalog with simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use showcase_core::{Price, Product, ProductId};

use super::{CatalogError, CatalogProvider};

/// Catalog that serves a fixed product list after an artificial delay.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    latency: Duration,
    fail: bool,
}

impl MockCatalog {
    /// The demo catalog: five products, id 4 out of stock.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            products: demo_products(),
            latency,
            fail: false,
        }
    }

    /// A catalog with no products.
    #[must_use]
    pub const fn empty(latency: Duration) -> Self {
        Self {
            products: Vec::new(),
            latency,
            fail: false,
        }
    }

    /// A catalog whose every fetch fails after the delay.
    #[must_use]
    pub const fn failing(latency: Duration) -> Self {
        Self {
            products: Vec::new(),
            latency,
            fail: true,
        }
    }

    /// A catalog serving the given products.
    #[must_use]
    pub const fn with_products(products: Vec<Product>, latency: Duration) -> Self {
        Self {
            products,
            latency,
            fail: false,
        }
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    #[instrument(skip(self))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail {
            return Err(CatalogError::Unavailable(
                "mock catalog configured to fail".to_string(),
            ));
        }

        tracing::debug!(count = self.products.len(), "Fetched products");
        Ok(self.products.clone())
    }

    /// Served from the in-memory list without the simulated delay.
    async fn lookup_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        if self.fail {
            return Err(CatalogError::Unavailable(
                "mock catalog configured to fail".to_string(),
            ));
        }

        Ok(self.products.iter().find(|product| product.id == id).cloned())
    }
}

fn product(
    id: i32,
    name: &str,
    description: &str,
    price: u32,
    image: &str,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_units(price),
        image: image.to_string(),
        category: category.to_string(),
        in_stock,
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        product(
            1,
            "MacBook Pro Laptop",
            "A powerful laptop for professional work with the M3 chip",
            89_999,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
            "Electronics",
            true,
        ),
        product(
            2,
            "iPhone 15 Smartphone",
            "The newest smartphone with a powerful camera and a fast processor",
            49_999,
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400",
            "Electronics",
            true,
        ),
        product(
            3,
            "AirPods Pro Earbuds",
            "Wireless earbuds with active noise cancellation",
            12_999,
            "https://images.unsplash.com/photo-1572569511254-d8f925fe2cbb?w=400",
            "Audio",
            true,
        ),
        product(
            4,
            "iPad Air Tablet",
            "A versatile tablet for work and play",
            32_999,
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400",
            "Electronics",
            false,
        ),
        product(
            5,
            "Apple Watch",
            "A smart watch for keeping track of your health",
            19_999,
            "https://images.unsplash.com/photo-1551816230-ef5deaed4a26?w=400",
            "Gadgets",
            true,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_catalog_shape() {
        let catalog = MockCatalog::new(Duration::ZERO);
        let products = catalog.fetch_products().await.unwrap();

        assert_eq!(products.len(), 5);
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let out_of_stock: Vec<i32> = products
            .iter()
            .filter(|p| !p.in_stock)
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(out_of_stock, vec![4]);
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let catalog = MockCatalog::new(Duration::ZERO);

        let product = catalog.fetch_product_by_id(ProductId::new(3)).await.unwrap();
        assert_eq!(product.unwrap().category, "Audio");

        let missing = catalog.fetch_product_by_id(ProductId::new(99)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let catalog = MockCatalog::new(Duration::from_secs(1));
        let started = tokio::time::Instant::now();

        catalog.fetch_products().await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_skips_latency() {
        let catalog = MockCatalog::new(Duration::from_secs(1));
        let started = tokio::time::Instant::now();

        let ipad = catalog.lookup_product(ProductId::new(4)).await.unwrap().unwrap();
        assert!(!ipad.in_stock);
        assert!(catalog.lookup_product(ProductId::new(99)).await.unwrap().is_none());

        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_failing_catalog() {
        let catalog = MockCatalog::failing(Duration::ZERO);
        assert!(matches!(
            catalog.fetch_products().await,
            Err(CatalogError::Unavailable(_))
        ));
        assert!(catalog.fetch_product_by_id(ProductId::new(1)).await.is_err());
        assert!(catalog.lookup_product(ProductId::new(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_not_an_error() {
        let catalog = MockCatalog::empty(Duration::ZERO);
        assert!(catalog.fetch_products().await.unwrap().is_empty());
    }
}
