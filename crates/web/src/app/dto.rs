use serde::Deserialize;

use chicory_catalog::{Article, CatalogEntry, Product};
use chicory_core::Entity;

// -------------------------
// Request DTOs
// -------------------------

/// `?category=` facet on listing pages. A blank value means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    pub fn selected(self) -> Option<String> {
        self.category.filter(|category| !category.trim().is_empty())
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    let detail = product.detail();
    serde_json::json!({
        "id": product.id().as_str(),
        "name": product.title(),
        "slug": product.slug().as_str(),
        "path": product.path(),
        "description": product.description(),
        "category": product.category(),
        "applications": product.applications(),
        "form": product.form(),
        "price_range": product.price_range(),
        "moq": product.moq(),
        "featured": product.is_featured(),
        "detail": {
            "overview": detail.overview,
            "origin": detail.origin,
            "processing": detail.processing,
            "specifications": detail.specifications,
            "features": detail.features,
        }
    })
}

pub fn article_to_json(article: &Article) -> serde_json::Value {
    serde_json::json!({
        "id": article.id().as_str(),
        "title": article.title(),
        "slug": article.slug().as_str(),
        "path": article.path(),
        "excerpt": article.excerpt(),
        "author": article.author(),
        "published": article.published(),
        "category": article.category(),
        "tags": article.tags(),
        "featured": article.is_featured(),
        "read_time": article.read_time(),
    })
}

/// Listing body: `{ "items": [...], "categories": [...] }`.
pub fn feed_to_json<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    categories: Vec<&str>,
    to_json: fn(&T) -> serde_json::Value,
) -> serde_json::Value {
    serde_json::json!({
        "items": items.into_iter().map(to_json).collect::<Vec<_>>(),
        "categories": categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chicory_catalog::{article_catalog, product_catalog};

    #[test]
    fn blank_category_is_no_filter() {
        let query = CategoryQuery {
            category: Some("  ".to_string()),
        };
        assert_eq!(query.selected(), None);
        assert_eq!(CategoryQuery::default().selected(), None);
    }

    #[test]
    fn product_json_carries_slug_and_detail() {
        let catalog = product_catalog().unwrap();
        let json = product_to_json(catalog.find_by_slug("liquid-chicory-extract"));
        assert_eq!(json["slug"], "liquid-chicory-extract");
        assert_eq!(json["path"], "/products/liquid-chicory-extract");
        assert!(json["detail"]["specifications"].as_array().unwrap().len() >= 3);
    }

    #[test]
    fn article_json_uses_iso_dates() {
        let catalog = article_catalog().unwrap();
        let json = article_to_json(catalog.default_item());
        let published = json["published"].as_str().unwrap();
        assert_eq!(published.len(), 10);
        assert_eq!(&published[4..5], "-");
    }
}
