//! HTTP application wiring (Axum router + shared site content).
//!
//! - `routes/`: handlers, one file per area of the site
//! - `dto.rs`: query parameters and JSON mapping
//! - `errors.rs`: JSON error bodies for the API

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;

use crate::middleware;
use crate::render;
use crate::route::Route;
use crate::site::Site;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(site: Arc<Site>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/style.css", get(routes::system::stylesheet))
        .nest("/api", routes::api::router())
        .merge(routes::router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(site)),
        )
}

/// Unmatched requests. Spellings of a known page (trailing slash) redirect
/// to its canonical URL; the rest get JSON under `/api` and the HTML 404 page
/// everywhere else.
async fn not_found(Extension(site): Extension<Arc<Site>>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("no endpoint at {path}"));
    }

    if method == Method::GET || method == Method::HEAD {
        let requested = uri.path_and_query().map_or(path, |pq| pq.as_str());
        if let Some(route) = Route::parse(requested) {
            let canonical = route.path();
            if canonical != requested {
                tracing::debug!(%requested, %canonical, "redirecting to canonical path");
                return Redirect::permanent(&canonical).into_response();
            }
        }
    }

    tracing::debug!(%path, "no route");
    let ctx = routes::pages::context(Route::Home);
    (StatusCode::NOT_FOUND, render::not_found(&site, &ctx, path)).into_response()
}
