//! Favorites route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use showcase_core::{Favorites, ProductId};

use crate::error::{Result, add_breadcrumb};
use crate::routes::products::FavoriteButtonView;
use crate::state::AppState;

/// Toggle favorite form data.
///
/// `favorite` is the state the button was showing when clicked.
#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteForm {
    pub product_id: ProductId,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub product_name: String,
}

/// Favorite button fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorite_button.html")]
pub struct FavoriteButtonTemplate {
    pub favorite: FavoriteButtonView,
}

/// Toggle a product's favorite state (HTMX).
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ToggleFavoriteForm>,
) -> Result<FavoriteButtonTemplate> {
    let is_favorite = state
        .favorites(session)
        .toggle_favorite(form.product_id, form.favorite)
        .await?;

    let product_id = form.product_id.to_string();
    add_breadcrumb(
        "favorites",
        if is_favorite {
            "Added favorite"
        } else {
            "Removed favorite"
        },
        Some(&[("product_id", product_id.as_str())]),
    );

    Ok(FavoriteButtonTemplate {
        favorite: FavoriteButtonView {
            product_id: form.product_id.as_i32(),
            product_name: form.product_name,
            is_favorite,
        },
    })
}

/// Favorites as JSON, in the stored wire shape.
#[instrument(skip(state, session))]
pub async fn api_index(State(state): State<AppState>, session: Session) -> Result<Json<Favorites>> {
    Ok(Json(state.favorites(session).load().await?))
}
