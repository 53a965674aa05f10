use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Router,
};
use maud::Markup;

use crate::app::dto::CategoryQuery;
use crate::app::routes::pages::render_route;
use crate::route::Route;
use crate::site::Site;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:slug", get(get_product))
}

pub async fn list_products(
    Extension(site): Extension<Arc<Site>>,
    Query(query): Query<CategoryQuery>,
) -> Markup {
    render_route(
        &site,
        Route::Products {
            category: query.selected(),
        },
    )
}

pub async fn get_product(Extension(site): Extension<Arc<Site>>, Path(slug): Path<String>) -> Markup {
    render_route(&site, Route::ProductDetail { slug })
}
