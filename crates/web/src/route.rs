//! The site's route table.
//!
//! [`Route::path`] and [`Route::parse`] are inverses over the static set of
//! pages, so links built from a `Route` always land on the page that renders
//! it. The router fallback uses [`Route::parse`] to send alternate spellings
//! of a page (trailing slash) to its canonical URL.

use chicory_core::slugify;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products { category: Option<String> },
    ProductDetail { slug: String },
    About,
    Blog { category: Option<String> },
    Article { slug: String },
    Contact,
    Privacy,
    Sitemap,
}

impl Route {
    /// Detail route for a display title; the slug goes through the shared
    /// `slugify` so it matches the catalog key.
    pub fn product_titled(title: &str) -> Self {
        Route::ProductDetail {
            slug: slugify(title),
        }
    }

    /// Path without any query string.
    pub fn base_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products { .. } => "/products".to_string(),
            Route::ProductDetail { slug } => format!("/products/{slug}"),
            Route::About => "/about".to_string(),
            Route::Blog { .. } => "/blog".to_string(),
            Route::Article { slug } => format!("/blog/{slug}"),
            Route::Contact => "/contact".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Sitemap => "/sitemap".to_string(),
        }
    }

    /// Full site-relative URL, including the `category` facet when set.
    pub fn path(&self) -> String {
        match self {
            Route::Products {
                category: Some(category),
            }
            | Route::Blog {
                category: Some(category),
            } => format!(
                "{}?category={}",
                self.base_path(),
                urlencoding::encode(category)
            ),
            _ => self.base_path(),
        }
    }

    /// Resolve a site-relative URL. Returns `None` for paths outside the
    /// route table. Detail slugs are taken verbatim; whether they exist in a
    /// catalog is the renderer's concern.
    pub fn parse(url: &str) -> Option<Route> {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let segments: Vec<&str> = path.split('/').skip(1).collect();
        let route = match segments.as_slice() {
            [""] => Route::Home,
            ["products"] => Route::Products {
                category: query.and_then(category_param),
            },
            ["products", slug] if !slug.is_empty() => Route::ProductDetail {
                slug: (*slug).to_string(),
            },
            ["about"] => Route::About,
            ["blog"] => Route::Blog {
                category: query.and_then(category_param),
            },
            ["blog", slug] if !slug.is_empty() => Route::Article {
                slug: (*slug).to_string(),
            },
            ["contact"] => Route::Contact,
            ["privacy"] => Route::Privacy,
            ["sitemap"] => Route::Sitemap,
            _ => return None,
        };
        Some(route)
    }
}

fn category_param(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "category")
        .and_then(|(_, value)| {
            urlencoding::decode(&value.replace('+', " "))
                .ok()
                .map(|decoded| decoded.into_owned())
        })
        .filter(|value| !value.is_empty())
}
