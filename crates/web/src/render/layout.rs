//! Document shell shared by every page: head, header navigation and footer.

use maud::{DOCTYPE, Markup, html};

use chicory_catalog::CatalogEntry;
use chicory_contact::CompanyContact;

use crate::content::{FOOTER_LINKS, FOOTER_PRODUCT_LINKS, NAVIGATION};
use crate::context::PageContext;
use crate::render::components::whatsapp_button;
use crate::route::Route;
use crate::site::Site;

/// Wrap page body markup in the full HTML document.
pub fn document(site: &Site, ctx: &PageContext, title: &str, description: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(description);
                title { (title) " | " (site.company.brand) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (header(site, ctx))
                main { (body) }
                (footer(site, ctx))
            }
        }
    }
}

fn nav_links(ctx: &PageContext) -> Markup {
    html! {
        @for item in NAVIGATION {
            a href=(item.href) class=[ctx.is_active(item.href).then_some("active")] { (item.label) }
        }
    }
}

fn header(site: &Site, ctx: &PageContext) -> Markup {
    html! {
        header class="site-header" {
            div class="container header-bar" {
                a class="brand" href=(Route::Home.path()) {
                    span class="brand-name" { (site.company.brand) }
                    span class="brand-tagline" { "Premium Chicory Manufacturer & Supplier" }
                }
                nav class="nav-desktop" { (nav_links(ctx)) }
                div class="header-actions" {
                    (whatsapp_button(&site.whatsapp, None))
                    a class="btn btn-cta" href=(Route::Contact.path()) { "Get Quote" }
                }
                // Menu state lives in the element itself and resets on every page load.
                details class="nav-mobile" {
                    summary aria-label="Toggle menu" { "Menu" }
                    nav {
                        (nav_links(ctx))
                        a class="btn btn-cta" href=(Route::Contact.path()) { "Get Quote" }
                    }
                }
            }
        }
    }
}

fn footer(site: &Site, ctx: &PageContext) -> Markup {
    let company: &CompanyContact = &site.company;
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                section {
                    h3 { (company.brand) }
                    p {
                        (company.legal_name) " - Premium chicory manufacturer and supplier. Established "
                        (company.established)
                        ", serving global B2B markets with quality chicory products from contract farming to export."
                    }
                    ul class="contact-lines" {
                        li { (company.address_short) }
                        li { a href=(company.tel_uri()) { (company.phone) } }
                        li { a href=(company.mailto_uri()) { (company.email) } }
                    }
                }
                section {
                    h3 { "Our Products" }
                    ul {
                        @for product in site.products.items().iter().take(FOOTER_PRODUCT_LINKS) {
                            li { a href=(Route::product_titled(product.title()).path()) { (product.title()) } }
                        }
                    }
                }
                section {
                    h3 { "Quick Links" }
                    ul {
                        @for link in FOOTER_LINKS {
                            li { a href=(link.href) { (link.label) } }
                        }
                    }
                }
                section {
                    h3 { "Connect With Us" }
                    p { (whatsapp_button(&site.whatsapp, Some("Chat with Sales Team"))) }
                    a class="btn btn-secondary" href=(Route::Contact.path()) { "Request Sample" }
                }
            }
            div class="container footer-bar" {
                p { "© " (ctx.year()) " " (company.legal_name) " (" (company.brand) "). All rights reserved." }
                p { "Certifications: " (company.certifications.join(" | ")) }
            }
        }
    }
}
