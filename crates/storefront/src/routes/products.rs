//! Product route handlers.
//!
//! The grid fragment replaces the home page's loading fallback. It fetches
//! the catalog once and renders a card per product with its favorite and
//! add-to-cart controls.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tower_sessions::Session;
use tracing::instrument;

use showcase_core::{Favorites, Product, ProductId, Quantity};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Favorite toggle display data for templates.
#[derive(Clone)]
pub struct FavoriteButtonView {
    pub product_id: i32,
    pub product_name: String,
    pub is_favorite: bool,
}

/// Add-to-cart control display data for templates.
#[derive(Clone)]
pub struct CartControlView {
    pub product_id: i32,
    pub in_stock: bool,
    pub quantity: i32,
    pub can_decrement: bool,
    pub can_increment: bool,
    /// Notice shown above the control (e.g. product unavailable).
    pub notice: Option<String>,
}

impl CartControlView {
    #[must_use]
    pub const fn new(product_id: ProductId, in_stock: bool, quantity: Quantity) -> Self {
        Self {
            product_id: product_id.as_i32(),
            in_stock,
            quantity: quantity.get(),
            can_decrement: quantity.can_decrement(),
            can_increment: quantity.can_increment(),
            notice: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
    pub favorite: FavoriteButtonView,
    pub control: CartControlView,
}

impl ProductCardView {
    fn new(product: &Product, favorites: &Favorites) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            category: product.category.clone(),
            in_stock: product.in_stock,
            favorite: FavoriteButtonView {
                product_id: product.id.as_i32(),
                product_name: product.name.clone(),
                is_favorite: favorites.contains(product.id),
            },
            control: CartControlView::new(product.id, product.in_stock, Quantity::default()),
        }
    }
}

/// Product grid fragment template.
///
/// Exactly one of three states renders: `failed`, empty `cards`, or the grid.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub cards: Vec<ProductCardView>,
    pub failed: bool,
}

/// Display the product grid fragment (HTMX).
///
/// A catalog failure renders a static error message instead of failing the
/// request, so the rest of the page stays usable.
#[instrument(skip(state, session))]
pub async fn grid(State(state): State<AppState>, session: Session) -> Result<ProductGridTemplate> {
    let favorites = state.favorites(session).load().await?;

    let template = match state.catalog().fetch_products().await {
        Ok(products) => ProductGridTemplate {
            cards: products
                .iter()
                .map(|product| ProductCardView::new(product, &favorites))
                .collect(),
            failed: false,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products");
            ProductGridTemplate {
                cards: Vec::new(),
                failed: true,
            }
        }
    };

    Ok(template)
}

/// List the catalog as JSON.
#[instrument(skip(state))]
pub async fn api_index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().fetch_products().await?))
}

/// Show a single product as JSON.
#[instrument(skip(state))]
pub async fn api_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .fetch_product_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use showcase_core::Price;

    use super::*;

    fn product(id: i32, in_stock: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: "Test".to_string(),
            price: Price::from_units(12_999),
            image: "https://example.com/p.jpg".to_string(),
            category: "Test".to_string(),
            in_stock,
        }
    }

    #[test]
    fn test_card_reflects_favorite_and_stock() {
        let favorites: Favorites = [ProductId::new(2)].into_iter().collect();

        let card = ProductCardView::new(&product(2, false), &favorites);
        assert!(card.favorite.is_favorite);
        assert!(!card.control.in_stock);
        assert_eq!(card.price, "12,999.00");

        let card = ProductCardView::new(&product(3, true), &favorites);
        assert!(!card.favorite.is_favorite);
        assert!(card.control.in_stock);
    }

    #[test]
    fn test_new_control_starts_at_one() {
        let control = CartControlView::new(ProductId::new(1), true, Quantity::default());
        assert_eq!(control.quantity, 1);
        assert!(!control.can_decrement);
        assert!(control.can_increment);
        assert!(control.notice.is_none());
    }

    #[test]
    fn test_grid_renders_states() {
        let error = ProductGridTemplate {
            cards: Vec::new(),
            failed: true,
        }
        .render()
        .unwrap_or_default();
        assert!(error.contains("Failed to load products"));

        let empty = ProductGridTemplate {
            cards: Vec::new(),
            failed: false,
        }
        .render()
        .unwrap_or_default();
        assert!(empty.contains("No products found"));
        assert!(!empty.contains("Failed to load products"));

        let favorites = Favorites::new();
        let full = ProductGridTemplate {
            cards: vec![ProductCardView::new(&product(7, true), &favorites)],
            failed: false,
        }
        .render()
        .unwrap_or_default();
        assert!(full.contains("Product 7"));
        assert!(full.contains("cart-control-7"));
    }
}
