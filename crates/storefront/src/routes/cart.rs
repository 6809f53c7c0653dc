//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session under the `cart` key.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use showcase_core::{Cart, Price, Product, ProductId, Quantity};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::routes::products::CartControlView;
use crate::services::CartError;
use crate::state::AppState;

/// HTMX event fired after the cart changes.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// HTMX event fired when an unavailable product is added.
pub const PRODUCT_UNAVAILABLE_EVENT: &str = "product-unavailable";

/// Notice shown when an out-of-stock product is added.
pub const UNAVAILABLE_NOTICE: &str = "This product is currently unavailable";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: i64,
}

impl CartView {
    /// Join cart entries with catalog products.
    ///
    /// Entries whose product is not in the catalog are still listed, without
    /// a price, since the cart does not validate product ids.
    #[must_use]
    pub fn new(cart: &Cart, products: &[Product]) -> Self {
        let mut subtotal = Some(Price::default());

        let items = cart
            .entries()
            .iter()
            .map(|entry| {
                let product = products.iter().find(|p| p.id == entry.product_id);
                let line = product.and_then(|p| {
                    u32::try_from(entry.quantity)
                        .ok()
                        .and_then(|quantity| p.price.checked_mul(quantity))
                });
                subtotal = match (subtotal, line) {
                    (Some(total), Some(line)) => total.checked_add(line),
                    (total, None) if product.is_none() => total,
                    _ => None,
                };

                CartItemView {
                    product_id: entry.product_id.as_i32(),
                    name: product.map_or_else(
                        || format!("Unknown product #{}", entry.product_id),
                        |p| p.name.clone(),
                    ),
                    quantity: entry.quantity,
                    price: product.map_or_else(|| "-".to_string(), |p| p.price.display()),
                    line_price: line.map_or_else(|| "-".to_string(), |l| l.display()),
                }
            })
            .collect();

        Self {
            items,
            subtotal: subtotal.map_or_else(|| "-".to_string(), |s| s.display()),
            item_count: cart.item_count(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub quantity: Option<i64>,
}

/// Quantity selector form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub product_id: ProductId,
    pub quantity: Option<i64>,
    pub delta: i32,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub catalog_failed: bool,
}

/// Add-to-cart control fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_control.html")]
pub struct CartControlTemplate {
    pub control: CartControlView,
}

/// "Added to cart" confirmation fragment template (for HTMX).
///
/// Re-fetches a fresh control once `reset_ms` has elapsed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub product_id: i32,
    pub reset_ms: u128,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: i64,
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let cart = state.cart(session).load().await?;

    let (products, catalog_failed) = match state.catalog().fetch_products().await {
        Ok(products) => (products, false),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load products for cart page");
            (Vec::new(), true)
        }
    };

    Ok(CartShowTemplate {
        cart: CartView::new(&cart, &products),
        catalog_failed,
    })
}

/// Add item to cart (HTMX).
///
/// The quantity is clamped to the selector range before it reaches the
/// cart. The stock check goes through
/// [`lookup_product`](crate::catalog::CatalogProvider::lookup_product), so
/// only the cart's own delay applies. Out-of-stock products get the control back
/// with a notice and an HTMX trigger for the client-side alert at once; the
/// cart is not touched.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let quantity = Quantity::new(form.quantity.unwrap_or(1));

    let product = state
        .catalog()
        .lookup_product(form.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    match state.cart(session).add_to_cart(&product, quantity.get()).await {
        Ok(cart) => {
            let product_id = product.id.to_string();
            let quantity = quantity.to_string();
            add_breadcrumb(
                "cart",
                "Added to cart",
                Some(&[("product_id", product_id.as_str()), ("quantity", quantity.as_str())]),
            );
            tracing::info!(items = cart.item_count(), "Added to cart");

            Ok((
                AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
                CartAddedTemplate {
                    product_id: product.id.as_i32(),
                    reset_ms: state.config().latency.added_reset.as_millis(),
                },
            )
                .into_response())
        }
        Err(CartError::Unavailable { .. }) => Ok((
            AppendHeaders([("HX-Trigger", PRODUCT_UNAVAILABLE_EVENT)]),
            CartControlTemplate {
                control: CartControlView::new(product.id, false, quantity)
                    .with_notice(UNAVAILABLE_NOTICE),
            },
        )
            .into_response()),
        Err(CartError::Storage(e)) => Err(e.into()),
    }
}

/// Adjust the quantity selector (HTMX).
///
/// Purely presentational: nothing is stored.
#[instrument]
pub async fn quantity(Form(form): Form<QuantityForm>) -> CartControlTemplate {
    let quantity = Quantity::new(form.quantity.unwrap_or(1)).adjust(form.delta);

    CartControlTemplate {
        control: CartControlView::new(form.product_id, form.in_stock, quantity),
    }
}

/// Fresh add-to-cart control with the quantity reset (HTMX).
///
/// Requested by the "added" confirmation, which only follows a successful
/// add, so the product is rendered as in stock. A stale page that adds an
/// unavailable product still gets rejected by [`add`].
#[instrument]
pub async fn button(Path(id): Path<i32>) -> CartControlTemplate {
    CartControlTemplate {
        control: CartControlView::new(ProductId::new(id), true, Quantity::default()),
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<CartCountTemplate> {
    let count = state.cart(session).item_count().await?;
    Ok(CartCountTemplate { count })
}

/// Cart contents as JSON, in the stored wire shape.
#[instrument(skip(state, session))]
pub async fn api_show(State(state): State<AppState>, session: Session) -> Result<Json<Cart>> {
    Ok(Json(state.cart(session).load().await?))
}
