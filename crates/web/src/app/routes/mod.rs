use axum::{routing::get, Router};

pub mod api;
pub mod blog;
pub mod contact;
pub mod pages;
pub mod products;
pub mod system;

/// HTML pages.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/privacy", get(pages::privacy))
        .route("/sitemap", get(pages::sitemap))
        .route("/contact", get(contact::show).post(contact::submit))
        .nest("/products", products::router())
        .nest("/blog", blog::router())
}
