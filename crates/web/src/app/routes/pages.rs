use std::sync::Arc;

use axum::extract::Extension;
use chrono::{Datelike, Utc};
use maud::Markup;

use crate::context::PageContext;
use crate::render;
use crate::route::Route;
use crate::site::Site;

/// Fresh per-request context; the clock is read here so rendering stays pure.
pub fn context(route: Route) -> PageContext {
    PageContext::new(route, Utc::now().year())
}

pub fn render_route(site: &Site, route: Route) -> Markup {
    render::page(site, &context(route))
}

pub async fn home(Extension(site): Extension<Arc<Site>>) -> Markup {
    render_route(&site, Route::Home)
}

pub async fn about(Extension(site): Extension<Arc<Site>>) -> Markup {
    render_route(&site, Route::About)
}

pub async fn privacy(Extension(site): Extension<Arc<Site>>) -> Markup {
    render_route(&site, Route::Privacy)
}

pub async fn sitemap(Extension(site): Extension<Arc<Site>>) -> Markup {
    render_route(&site, Route::Sitemap)
}
