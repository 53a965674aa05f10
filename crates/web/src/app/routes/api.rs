use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    routing::get,
    Json, Router,
};

use crate::app::dto;
use crate::site::Site;

/// Read-only JSON feed of the catalogs.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:slug", get(get_product))
        .route("/posts", get(list_posts))
}

pub async fn list_products(Extension(site): Extension<Arc<Site>>) -> Json<serde_json::Value> {
    let catalog = &site.products;
    Json(dto::feed_to_json(
        catalog.items(),
        catalog.list_categories(),
        dto::product_to_json,
    ))
}

/// Same lookup as the product page: unknown slugs yield the default product.
pub async fn get_product(
    Extension(site): Extension<Arc<Site>>,
    Path(slug): Path<String>,
) -> Json<serde_json::Value> {
    if site.products.get(&slug).is_none() {
        tracing::debug!(%slug, "unknown product slug in feed");
    }
    Json(dto::product_to_json(site.products.find_by_slug(&slug)))
}

pub async fn list_posts(Extension(site): Extension<Arc<Site>>) -> Json<serde_json::Value> {
    let catalog = &site.articles;
    Json(dto::feed_to_json(
        catalog.items(),
        catalog.list_categories(),
        dto::article_to_json,
    ))
}
