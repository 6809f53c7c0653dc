//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (loading fallback)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products/grid          - Product grid fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns "added" fragment, triggers cart-updated)
//! POST /cart/quantity          - Adjust quantity selector (returns control fragment)
//! GET  /cart/button/{id}       - Fresh add-to-cart control (fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Favorites (HTMX fragments)
//! POST /favorites/toggle       - Toggle favorite (returns button fragment)
//!
//! # JSON API
//! GET  /api/products           - Catalog
//! GET  /api/products/{id}      - Single product
//! GET  /api/cart               - Visitor's cart
//! GET  /api/favorites          - Visitor's favorites
//! ```

pub mod cart;
pub mod favorites;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/grid", get(products::grid))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/quantity", post(cart::quantity))
        .route("/button/{id}", get(cart::button))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new().route("/toggle", post(favorites::toggle))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::api_index))
        .route("/products/{id}", get(products::api_show))
        .route("/cart", get(cart::api_show))
        .route("/favorites", get(favorites::api_index))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
        .nest("/api", api_routes())
}
