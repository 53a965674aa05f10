//! HTML rendering.
//!
//! [`page`] is a pure function of the site content and the request context:
//! rendering the same route twice yields byte-identical markup. Handlers do
//! all the IO (clock, form body) before calling in.

use maud::{Markup, html};

use chicory_catalog::CatalogEntry;

use crate::context::PageContext;
use crate::route::Route;
use crate::site::Site;

mod blog;
mod company;
mod components;
mod contact;
mod home;
mod layout;
mod products;

/// Render the full document for `ctx.route()`.
pub fn page(site: &Site, ctx: &PageContext) -> Markup {
    let (title, description, body) = match ctx.route() {
        Route::Home => (
            "Premium Chicory Manufacturer & Supplier".to_string(),
            "Industrial chicory roots, roasted cubes, granules, powder and liquid extract for global B2B buyers.",
            home::home(site),
        ),
        Route::Products { category } => (
            category
                .as_deref()
                .map_or_else(|| "All Products".to_string(), |c| format!("{c} | Products")),
            "Bulk chicory products with wholesale pricing and minimum order quantities.",
            products::product_list(site, category.as_deref()),
        ),
        Route::ProductDetail { slug } => (
            site.products.find_by_slug(slug).title().to_string(),
            "Specifications, pricing and MOQ for bulk chicory buyers.",
            products::product_detail(site, slug),
        ),
        Route::About => (
            "About Us".to_string(),
            "Company profile, certifications and contract-farming model.",
            company::about(site),
        ),
        Route::Blog { category } => (
            category
                .as_deref()
                .map_or_else(|| "Industry Blog".to_string(), |c| format!("{c} | Blog")),
            "Chicory industry insights, market analysis and processing expertise.",
            blog::blog_list(site, category.as_deref()),
        ),
        Route::Article { slug } => (
            site.articles.find_by_slug(slug).title().to_string(),
            "Chicory industry insights.",
            blog::article(site, slug),
        ),
        Route::Contact => (
            "Contact Us".to_string(),
            "Business inquiries, bulk quotes and samples.",
            contact::contact(site, ctx),
        ),
        Route::Privacy => (
            "Privacy Policy".to_string(),
            "Data privacy and website usage policies.",
            company::privacy(site),
        ),
        Route::Sitemap => (
            "Site Map".to_string(),
            "Complete website navigation structure.",
            company::sitemap(site),
        ),
    };
    layout::document(site, ctx, &title, description, body)
}

/// Document for paths outside the route table, wrapped in the usual shell.
pub fn not_found(site: &Site, ctx: &PageContext, path: &str) -> Markup {
    let body = html! {
        section class="container page-header" {
            h1 { "Page Not Found" }
            p class="lead" { "Nothing lives at " code { (path) } "." }
            div class="actions" {
                a class="btn btn-cta" href=(Route::Home.path()) { "Back to Home" }
                a class="btn btn-outline" href=(Route::Sitemap.path()) { "Browse the Site Map" }
            }
        }
    };
    layout::document(site, ctx, "Page Not Found", "Page not found.", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chicory_contact::{InquiryField, InquiryForm};

    fn every_route(site: &Site) -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::Products { category: None },
            Route::Products {
                category: Some("Extracts".to_string()),
            },
            Route::About,
            Route::Blog { category: None },
            Route::Contact,
            Route::Privacy,
            Route::Sitemap,
        ];
        routes.extend(site.products.items().iter().map(|p| Route::product_titled(p.title())));
        routes.extend(site.articles.items().iter().map(|a| Route::Article {
            slug: a.slug().to_string(),
        }));
        routes
    }

    #[test]
    fn rendering_is_deterministic() {
        let site = Site::load().unwrap();
        for route in every_route(&site) {
            let ctx = PageContext::new(route.clone(), 2025);
            assert_eq!(
                page(&site, &ctx).into_string(),
                page(&site, &ctx).into_string(),
                "{route:?}"
            );
        }
    }

    #[test]
    fn every_page_has_shell() {
        let site = Site::load().unwrap();
        for route in every_route(&site) {
            let html = page(&site, &PageContext::new(route.clone(), 2031)).into_string();
            assert!(html.starts_with("<!DOCTYPE html>"), "{route:?}");
            assert!(html.contains("<details class=\"nav-mobile\">"), "{route:?}");
            assert!(html.contains("© 2031 RS Impex (RSI Chicory). All rights reserved."), "{route:?}");
            assert!(html.contains("Certifications: FSSAI | APEDA | IEC"), "{route:?}");
        }
    }

    #[test]
    fn footer_links_first_six_products_by_slug() {
        let site = Site::load().unwrap();
        let html = page(&site, &PageContext::new(Route::Home, 2025)).into_string();
        let footer = html.split("<footer").nth(1).unwrap();
        for product in site.products.items().iter().take(6) {
            assert!(footer.contains(&format!("href=\"{}\"", product.path())), "{}", product.title());
        }
        let seventh = &site.products.items()[6];
        assert!(!footer.contains(&format!("href=\"{}\"", seventh.path())));
    }

    #[test]
    fn active_nav_entry_follows_route() {
        let site = Site::load().unwrap();
        let ctx = PageContext::new(
            Route::ProductDetail {
                slug: "dried-chicory-cubes".to_string(),
            },
            2025,
        );
        let html = page(&site, &ctx).into_string();
        assert!(html.contains("<a href=\"/products\" class=\"active\">All Products</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
    }

    #[test]
    fn contact_page_carries_form_state() {
        let site = Site::load().unwrap();
        let mut form = InquiryForm::new();
        form.update_field(InquiryField::Name, "Asha");
        let ctx = PageContext::new(Route::Contact, 2025).with_inquiry(form, None);
        let html = page(&site, &ctx).into_string();
        assert!(html.contains("value=\"Asha\""));
    }

    #[test]
    fn not_found_names_the_path() {
        let site = Site::load().unwrap();
        let html = not_found(&site, &PageContext::new(Route::Home, 2025), "/pricing<x>").into_string();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("/pricing&lt;x&gt;"));
    }
}
