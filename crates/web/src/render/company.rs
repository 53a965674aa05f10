//! Company pages: about, privacy policy and site map.

use maud::{Markup, html};

use chicory_catalog::CatalogEntry;

use crate::content::{
    ABOUT_STORY, CAPABILITIES, CERTIFICATIONS, COMPANY_FACTS, CONTRACT_FARMING_STEPS, MILESTONES,
    PRIVACY_COOKIES, PRIVACY_LAST_UPDATED, PRIVACY_RIGHTS, PRIVACY_SECTIONS, SITEMAP_MAIN,
    SITEMAP_UTILITY, SitemapEntry,
};
use crate::render::components::whatsapp_button;
use crate::route::Route;
use crate::site::Site;

pub fn about(site: &Site) -> Markup {
    let company = &site.company;
    html! {
        section class="container page-header" {
            h1 { "About " (company.brand) }
            p class="lead" {
                (company.legal_name) " - Your trusted partner for premium chicory products. Established in "
                (company.established)
                ", we are committed to manufacturing excellence, B2B partnerships, and export readiness."
            }
        }

        section class="container grid grid-2" {
            div {
                h2 { "Our Story" }
                @for paragraph in ABOUT_STORY {
                    p { (paragraph) }
                }
            }
            div class="card" {
                h3 { "Established " (company.established) }
                p { "Etah, Uttar Pradesh, India" }
                dl class="facts" {
                    dt { (site.products.len()) "+" } dd { "Product Lines" }
                    dt { "100%" } dd { "B2B Focus" }
                }
            }
        }

        section class="container grid grid-3" {
            @for fact in COMPANY_FACTS {
                div class="card" {
                    p class="figure" { (fact.title) }
                    p { (fact.text) }
                }
            }
        }

        section class="container" {
            h2 { "Our Capabilities" }
            div class="grid grid-4" {
                @for capability in CAPABILITIES {
                    div class="card" {
                        h3 { (capability.title) }
                        p { (capability.text) }
                    }
                }
            }
        }

        section class="container" {
            h2 { "Certifications & Compliance" }
            div class="grid grid-3" {
                @for certification in CERTIFICATIONS {
                    div class="card certification" {
                        h3 { (certification.title) }
                        p { (certification.text) }
                    }
                }
            }
        }

        section class="container" {
            h2 { "Contract Farming Excellence" }
            ul class="steps" {
                @for step in CONTRACT_FARMING_STEPS {
                    li {
                        h4 { (step.title) }
                        p { (step.text) }
                    }
                }
            }
            div class="card" {
                h3 { "Sustainable Agriculture" }
                p { "French seed lineage for superior quality" }
            }
        }

        section class="container" {
            h2 { "Company Milestones" }
            ol class="timeline" {
                @for milestone in MILESTONES {
                    li {
                        span class="badge" { (milestone.year) }
                        h3 { (milestone.title) }
                        p { (milestone.text) }
                    }
                }
            }
        }

        section class="container cta-band" {
            h2 { "Partner with " (company.brand) }
            p {
                "Join our growing network of B2B partners. Experience our commitment to quality, reliability, and professional service in the chicory industry."
            }
            div class="actions" {
                a class="btn btn-secondary" href=(Route::Contact.path()) { "Contact Our Team" }
                a class="btn btn-outline" href=(Route::Products { category: None }.path()) { "View Products" }
                (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
            }
        }
    }
}

pub fn privacy(site: &Site) -> Markup {
    let company = &site.company;
    html! {
        section class="container page-header" {
            h1 { "Privacy Policy" }
            p class="lead" {
                "How " (company.legal_name) " (" (company.brand) ") collects, uses and protects business information."
            }
            p class="muted" { "Last updated: " (PRIVACY_LAST_UPDATED) }
        }

        section class="container policy" {
            @for section in PRIVACY_SECTIONS {
                div class="card" {
                    h2 { (section.title) }
                    ul {
                        @for point in section.points {
                            li { (point) }
                        }
                    }
                }
            }

            div class="card" {
                h2 { "Cookies & Tracking" }
                p { "Our website uses cookies to improve your browsing experience:" }
                ul {
                    @for cookie in PRIVACY_COOKIES {
                        li { strong { (cookie.title) ": " } (cookie.text) }
                    }
                }
                p { "You can control cookie settings through your browser preferences." }
            }

            div class="card" {
                h2 { "Your Rights" }
                ul {
                    @for right in PRIVACY_RIGHTS {
                        li { (right) }
                    }
                }
            }

            div class="card" {
                h2 { "Contact Us About Privacy" }
                p { "For privacy questions or data requests, contact:" }
                p { strong { (company.legal_name) " (" (company.brand) ")" } }
                @for line in company.address {
                    p { (line) }
                }
                p { a href=(company.mailto_uri()) { (company.email) } }
                p { a href=(company.tel_uri()) { (company.phone) } }
            }

            div class="card" {
                h2 { "Policy Updates" }
                p {
                    "We may update this privacy policy from time to time. Changes are posted on this page with a revised \"last updated\" date."
                }
            }
        }
    }
}

fn sitemap_entries(entries: &[SitemapEntry]) -> Markup {
    html! {
        ul class="sitemap-list" {
            @for entry in entries {
                li {
                    a href=(entry.href) { (entry.title) }
                    p { (entry.text) }
                }
            }
        }
    }
}

pub fn sitemap(site: &Site) -> Markup {
    html! {
        section class="container page-header" {
            h1 { "Site Map" }
            p class="lead" { "Every page of the " (site.company.brand) " website." }
        }

        section class="container grid grid-2" {
            div class="card" {
                h2 { "Main Pages" }
                (sitemap_entries(SITEMAP_MAIN))
            }
            div class="card" {
                h2 { "Product Pages" }
                ul class="sitemap-list" {
                    @for product in site.products.items() {
                        li { a href=(Route::product_titled(product.title()).path()) { (product.title()) } }
                    }
                }
            }
            div class="card" {
                h2 { "Product Categories" }
                ul class="sitemap-list" {
                    @for category in site.products.list_categories() {
                        li {
                            a href=(Route::Products { category: Some(category.to_string()) }.path()) { (category) }
                        }
                    }
                }
            }
            div class="card" {
                h2 { "Industry Blog" }
                ul class="sitemap-list" {
                    @for post in site.articles.items() {
                        li { a href=(Route::Article { slug: post.slug().to_string() }.path()) { (post.title()) } }
                    }
                }
            }
            div class="card" {
                h2 { "Utility Pages" }
                (sitemap_entries(SITEMAP_UTILITY))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_links_every_product_by_slug() {
        let site = Site::load().unwrap();
        let html = sitemap(&site).into_string();
        for product in site.products.items() {
            assert!(html.contains(&format!("href=\"{}\"", product.path())), "{}", product.title());
        }
        assert!(html.contains("href=\"/products?category=Roasted%20Products\""));
    }

    #[test]
    fn privacy_shows_last_updated() {
        let site = Site::load().unwrap();
        let html = privacy(&site).into_string();
        assert!(html.contains("Last updated: January 15, 2025"));
        assert!(html.contains("Your Rights"));
    }

    #[test]
    fn about_lists_certifications() {
        let site = Site::load().unwrap();
        let html = about(&site).into_string();
        for name in ["FSSAI", "APEDA", "IEC"] {
            assert!(html.contains(&format!("<h3>{name}</h3>")));
        }
    }
}
