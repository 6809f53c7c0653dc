//! Home page route handler.
//!
//! The page itself renders without touching the catalog. It carries a
//! loading fallback that requests the product grid as soon as it loads.

use askama::Template;
use askama_web::WebTemplate;

/// Page title.
pub const TITLE: &str = "Product Catalog";

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
}

/// Display the home page.
pub async fn home() -> HomeTemplate {
    HomeTemplate { title: TITLE }
}
