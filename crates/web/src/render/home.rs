use maud::{Markup, html};

use crate::content::{HERO_BADGES, HOME_FEATURES, HOME_PRODUCT_GROUPS};
use crate::render::components::{product_card, whatsapp_button};
use crate::route::Route;
use crate::site::Site;

pub fn home(site: &Site) -> Markup {
    let company = &site.company;
    html! {
        section class="hero" {
            div class="container hero-grid" {
                div {
                    h1 { "Premium " span class="accent" { "Chicory Products" } " for Global Markets" }
                    p class="lead" {
                        (company.legal_name) " - Established " (company.established)
                        ". Leading manufacturer and supplier of industrial chicory products. From contract farming to export, serving coffee processors, food manufacturers, and beverage companies worldwide."
                    }
                    div class="actions" {
                        a class="btn btn-cta" href=(Route::Products { category: None }.path()) { "View All Products" }
                        a class="btn btn-outline" href=(Route::Contact.path()) { "Request Sample" }
                        (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
                    }
                    ul class="hero-badges" {
                        @for badge in HERO_BADGES {
                            li { (badge) }
                        }
                    }
                }
                div class="hero-card" {
                    h3 { "Industrial Chicory Specialists" }
                    p { "Etah, Uttar Pradesh, India" }
                }
            }
        }

        section class="container" {
            h2 { "Why Choose " (company.brand) "?" }
            p class="lead" {
                "Our commitment to quality, reliability, and B2B partnerships makes us the preferred chicory supplier for businesses worldwide."
            }
            div class="grid grid-4" {
                @for feature in HOME_FEATURES {
                    div class="card" {
                        h3 { (feature.title) }
                        p { (feature.text) }
                    }
                }
            }
        }

        section class="container" {
            h2 { "Our Product Range" }
            p class="lead" {
                "Comprehensive chicory solutions for coffee blending, food manufacturing, and beverage production. All products available in bulk quantities."
            }
            div class="grid grid-4" {
                @for group in HOME_PRODUCT_GROUPS {
                    a class="card tile" href=(Route::Products { category: None }.path()) {
                        h3 { (group.title) }
                        p { (group.text) }
                    }
                }
            }
        }

        section class="container" {
            h2 { "Featured Products" }
            div class="grid grid-4" {
                @for product in site.products.list_featured() {
                    (product_card(product))
                }
            }
        }

        section class="cta-band" {
            div class="container" {
                h2 { "Ready to Partner with " (company.brand) "?" }
                p {
                    "Join leading companies who trust us for their chicory supply needs. Get bulk pricing, samples, and export documentation support."
                }
                div class="actions" {
                    a class="btn btn-secondary" href=(Route::Contact.path()) { "Get Bulk Quote" }
                    a class="btn btn-outline" href=(Route::Contact.path()) { "Request Sample" }
                    (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
                }
            }
        }
    }
}
