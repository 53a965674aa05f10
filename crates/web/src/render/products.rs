use maud::{Markup, html};

use chicory_catalog::{CatalogEntry, Product};

use crate::content::LOGISTICS_POINTS;
use crate::render::components::{badge, category_facets, product_card, whatsapp_button};
use crate::route::Route;
use crate::site::Site;

/// Related products listed under a product page.
pub const RELATED_LIMIT: usize = 3;

fn products_in(category: String) -> Route {
    Route::Products {
        category: Some(category),
    }
}

pub fn product_list(site: &Site, category: Option<&str>) -> Markup {
    let catalog = &site.products;
    let shown: Vec<&Product> = match category {
        Some(category) => catalog.in_category(category),
        None => catalog.items().iter().collect(),
    };

    html! {
        section class="container page-header" {
            h1 { "Our Product Range" }
            p class="lead" {
                "Comprehensive chicory solutions for coffee processors, food manufacturers, and beverage companies. All products available in bulk quantities with competitive wholesale pricing."
            }
        }

        section class="container banner" {
            h2 { "Featured Products" }
            p { "Our most popular chicory products for B2B buyers" }
            div class="tags" {
                @for product in catalog.list_featured() {
                    a class="badge" href=(product.path()) { (product.title()) }
                }
            }
        }

        section class="container" {
            (category_facets(
                Route::Products { category: None },
                &catalog.list_categories(),
                category,
                products_in,
            ))
            @if shown.is_empty() {
                p class="empty" { "No products in this category yet." }
            } @else {
                div class="grid grid-3" {
                    @for product in &shown {
                        (product_card(product))
                    }
                }
            }
        }

        section class="container cta-band" {
            h2 { "Need Custom Chicory Solutions?" }
            p {
                "We offer custom processing, private labeling, and specialized chicory products for large-scale B2B orders. Contact our sales team for personalized quotes."
            }
            div class="actions" {
                a class="btn btn-secondary" href=(Route::Contact.path()) { "Get Custom Quote" }
                (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
            }
        }
    }
}

/// Product page for `slug`. A slug outside the catalog renders the default
/// product instead of an error page.
pub fn product_detail(site: &Site, slug: &str) -> Markup {
    let catalog = &site.products;
    if catalog.get(slug).is_none() {
        tracing::debug!(slug, fallback = %catalog.default_item().slug(), "unknown product slug");
    }
    let product = catalog.find_by_slug(slug);
    let detail = product.detail();
    let company = &site.company;

    html! {
        section class="container" {
            nav class="breadcrumb" aria-label="Breadcrumb" {
                a href=(Route::Home.path()) { "Home" }
                " / "
                a href=(Route::Products { category: None }.path()) { "Products" }
                " / "
                span { (product.title()) }
            }
            a class="btn btn-outline" href=(Route::Products { category: None }.path()) { "Back to Products" }

            div class="detail-grid" {
                div class="detail-main" {
                    (badge(product.category()))
                    h1 { (product.title()) }
                    p class="lead" { (product.description()) }
                    @if detail.overview != product.description() {
                        p { (detail.overview) }
                    }

                    @if !detail.features.is_empty() {
                        div class="card" {
                            h3 { "Key Features" }
                            div class="tags" {
                                @for feature in &detail.features {
                                    (badge(feature))
                                }
                            }
                        }
                    }

                    @if !detail.origin.is_empty() || !detail.processing.is_empty() {
                        div class="grid grid-2" {
                            @if !detail.origin.is_empty() {
                                div class="card" {
                                    h3 { "Origin" }
                                    p { (detail.origin) }
                                }
                            }
                            @if !detail.processing.is_empty() {
                                div class="card" {
                                    h3 { "Processing" }
                                    p { (detail.processing) }
                                }
                            }
                        }
                    }

                    div class="card" {
                        h3 { "Applications & Uses" }
                        ul {
                            @for application in product.applications() {
                                li { (application) }
                            }
                        }
                    }

                    @if !detail.specifications.is_empty() {
                        div class="card" {
                            h3 { "Technical Specifications" }
                            dl class="spec-sheet" {
                                @for spec in &detail.specifications {
                                    dt { (spec.label) }
                                    dd { (spec.value) }
                                }
                            }
                        }
                    }
                }

                aside class="detail-side" {
                    div class="card" {
                        h3 { "Pricing & MOQ" }
                        p class="muted" { "Price Range" }
                        p class="price" { (product.price_range()) }
                        p class="fine" { "*Bulk discounts available" }
                        p class="muted" { "Minimum Order Quantity" }
                        p class="moq" { (product.moq()) }
                        a class="btn btn-cta" href=(Route::Contact.path()) { "Request Quote" }
                        a class="btn btn-outline" href=(Route::Contact.path()) { "Request Sample" }
                        (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
                    }
                    div class="card" {
                        h3 { "Logistics & Support" }
                        ul {
                            @for point in LOGISTICS_POINTS {
                                li { (point) }
                            }
                        }
                    }
                    div class="card" {
                        h3 { "Direct Contact" }
                        dl {
                            dt { "Phone" } dd { a href=(company.tel_uri()) { (company.phone) } }
                            dt { "Email" } dd { a href=(company.mailto_uri()) { (company.email) } }
                            dt { "Location" } dd { (company.address_short) }
                        }
                    }
                }
            }
        }

        section class="container" {
            h2 { "Related Products" }
            div class="grid grid-3" {
                @for related in catalog.related(product, RELATED_LIMIT) {
                    div class="card related" {
                        h3 { (related.title()) }
                        a class="btn btn-outline" href=(Route::product_titled(related.title()).path()) { "View Details" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_keeps_facets() {
        let site = Site::load().unwrap();
        let html = product_list(&site, Some("Cheese")).into_string();
        assert!(html.contains("No products in this category yet."));
        assert!(html.contains("/products?category=Raw%20Materials"));
        assert!(!html.contains("class=\"card product-card\""));
    }

    #[test]
    fn category_filter_limits_grid() {
        let site = Site::load().unwrap();
        let html = product_list(&site, Some("Roasted Products")).into_string();
        assert_eq!(html.matches("class=\"card product-card\"").count(), 2);
    }

    #[test]
    fn detail_falls_back_to_default_product() {
        let site = Site::load().unwrap();
        let fallback = product_detail(&site, "no-such-product").into_string();
        let roots = product_detail(&site, "raw-chicory-roots").into_string();
        assert_eq!(fallback, roots);
        assert!(roots.contains("<h1>Raw Chicory Roots</h1>"));
    }

    #[test]
    fn detail_lists_at_most_three_related_products() {
        let site = Site::load().unwrap();
        let html = product_detail(&site, "liquid-chicory-extract").into_string();
        assert_eq!(html.matches("class=\"card related\"").count(), RELATED_LIMIT);
        assert!(html.contains("Technical Specifications"));
    }

    #[test]
    fn sparse_detail_sheet_omits_empty_sections() {
        let site = Site::load().unwrap();
        let html = product_detail(&site, "roasted-chicory-granules").into_string();
        assert!(html.contains("<h1>Roasted Chicory Granules</h1>"));
        assert!(html.contains("<dt>Form</dt><dd>Granules</dd>"));
        assert!(!html.contains("Key Features"));
        assert!(!html.contains("<h3>Origin</h3>"));
        assert!(!html.contains("<h3>Processing</h3>"));
        assert!(!html.contains("Moisture"));
        assert!(!html.contains("Shelf Life"));
    }

    #[test]
    fn flagship_detail_sheet_renders_every_section() {
        let site = Site::load().unwrap();
        let html = product_detail(&site, "roasted-chicory-cubes-dark-roast").into_string();
        assert!(html.contains("Key Features"));
        assert!(html.contains("<h3>Origin</h3>"));
        assert!(html.contains("<h3>Processing</h3>"));
        assert!(html.contains("<dt>Moisture</dt><dd>4-6%</dd>"));
    }
}
