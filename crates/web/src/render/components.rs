//! Small pieces of markup reused across pages.

use maud::{Markup, html};

use chicory_catalog::{Article, CatalogEntry, Product};
use chicory_contact::WhatsAppLink;

use crate::route::Route;

/// Applications shown on a product card before collapsing into "+N more".
pub const CARD_APPLICATIONS: usize = 2;

/// Outbound WhatsApp anchor. Always opens a new browsing context.
pub fn whatsapp_button(link: &WhatsAppLink, label: Option<&str>) -> Markup {
    html! {
        a class="btn btn-whatsapp" href=(link.url()) target="_blank" rel="noopener noreferrer"
            aria-label="Chat on WhatsApp" {
            (label.unwrap_or("WhatsApp"))
        }
    }
}

pub fn badge(text: &str) -> Markup {
    html! { span class="badge" { (text) } }
}

/// "All" plus one link per category; the selected one is marked active.
pub fn category_facets(all: Route, categories: &[&str], selected: Option<&str>, facet: fn(String) -> Route) -> Markup {
    html! {
        nav class="facets" aria-label="Categories" {
            a href=(all.path()) class=[selected.is_none().then_some("active")] { "All" }
            @for category in categories {
                a href=(facet((*category).to_string()).path())
                    class=[(selected == Some(*category)).then_some("active")] {
                    (category)
                }
            }
        }
    }
}

pub fn product_card(product: &Product) -> Markup {
    let applications = product.applications();
    let hidden = applications.len().saturating_sub(CARD_APPLICATIONS);
    html! {
        article class="card product-card" {
            div class="card-head" {
                (badge(product.category()))
                @if product.is_featured() {
                    span class="badge badge-featured" { "Featured" }
                }
            }
            h3 { a href=(product.path()) { (product.title()) } }
            p { (product.summary()) }
            dl class="facts" {
                dt { "Form" } dd { (product.form()) }
                dt { "Price" } dd { (product.price_range()) }
                dt { "MOQ" } dd { (product.moq()) }
            }
            div class="tags" {
                @for application in applications.iter().take(CARD_APPLICATIONS) {
                    (badge(application))
                }
                @if hidden > 0 {
                    span class="badge badge-more" { "+" (hidden) " more" }
                }
            }
            a class="btn btn-outline" href=(product.path()) { "View Details" }
        }
    }
}

pub fn article_card(article: &Article) -> Markup {
    html! {
        article class="card article-card" {
            div class="card-head" {
                (badge(article.category()))
                span class="read-time" { (article.read_time()) }
            }
            h3 { a href=(article.path()) { (article.title()) } }
            p { (article.summary()) }
            p class="byline" {
                (article.author()) " · "
                time datetime=(article.published().format("%Y-%m-%d")) {
                    (article.published().format("%B %-d, %Y"))
                }
            }
            div class="tags" {
                @for tag in article.tags() {
                    (badge(tag))
                }
            }
            a class="btn btn-outline" href=(article.path()) { "Read More" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chicory_catalog::product_catalog;

    #[test]
    fn whatsapp_anchor_opens_new_context() {
        let html = whatsapp_button(&WhatsAppLink::sales().unwrap(), None).into_string();
        assert!(html.contains("href=\"https://wa.me/919810550456?text="));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn product_card_collapses_extra_applications() {
        let catalog = product_catalog().unwrap();
        let roots = catalog.find_by_slug("raw-chicory-roots");
        assert_eq!(roots.applications().len(), 3);

        let html = product_card(roots).into_string();
        assert!(html.contains("Coffee Industry"));
        assert!(html.contains("Food Processing"));
        assert!(!html.contains("Pharmaceutical"));
        assert!(html.contains("+1 more"));
    }

    #[test]
    fn facets_mark_selected_category() {
        let html = category_facets(
            Route::Products { category: None },
            &["Raw Materials", "Extracts"],
            Some("Extracts"),
            |category| Route::Products {
                category: Some(category),
            },
        )
        .into_string();
        assert!(html.contains("<a href=\"/products?category=Extracts\" class=\"active\">"));
        assert!(html.contains("<a href=\"/products\">All</a>"));
    }
}
