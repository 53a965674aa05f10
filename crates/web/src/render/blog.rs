use maud::{Markup, html};

use chicory_catalog::{Article, Catalog, CatalogEntry};

use crate::render::components::{article_card, badge, category_facets, whatsapp_button};
use crate::route::Route;
use crate::site::Site;

pub const FEATURED_LIMIT: usize = 3;

fn posts_in(category: String) -> Route {
    Route::Blog {
        category: Some(category),
    }
}

/// At most [`FEATURED_LIMIT`] featured posts, in catalog order.
fn featured_strip(catalog: &Catalog<Article>) -> Markup {
    html! {
        section class="container" {
            h2 { "Featured Articles" }
            div class="grid grid-3" {
                @for article in catalog.list_featured().into_iter().take(FEATURED_LIMIT) {
                    (article_card(article))
                }
            }
        }
    }
}

pub fn blog_list(site: &Site, category: Option<&str>) -> Markup {
    let catalog = &site.articles;
    let latest: Vec<&Article> = match category {
        Some(category) => catalog.in_category(category),
        None => catalog.items().iter().collect(),
    };

    html! {
        section class="container page-header" {
            h1 { "Industry Insights" }
            p class="lead" {
                "Stay informed with the latest trends, analysis, and insights in the chicory industry. Expert perspectives on processing, export markets, and B2B opportunities."
            }
        }

        (featured_strip(catalog))

        section class="container" {
            h3 { "Browse by Category" }
            (category_facets(Route::Blog { category: None }, &catalog.list_categories(), category, posts_in))
        }

        section class="container" {
            h2 { "Latest Articles" }
            @if latest.is_empty() {
                p class="empty" { "No articles in this category yet." }
            } @else {
                div class="grid grid-3" {
                    @for article in &latest {
                        (article_card(article))
                    }
                }
            }
        }

        // Display only: there is no subscription endpoint.
        section class="container cta-band newsletter" {
            h2 { "Stay Updated with Industry Insights" }
            p {
                "Subscribe to our industry newsletter for the latest chicory market trends, processing innovations, and export opportunities delivered to your inbox."
            }
            div class="newsletter-row" {
                input type="email" placeholder="Enter your business email" aria-label="Business email";
                button type="button" class="btn btn-secondary" { "Subscribe" }
            }
        }

        section class="container card closing" {
            h2 { "Ready to Discuss Your Chicory Requirements?" }
            p {
                "Our B2B experts are here to help with bulk orders, custom processing, and export solutions. Contact us today."
            }
            div class="actions" {
                a class="btn btn-cta" href=(Route::Contact.path()) { "Contact Sales Team" }
                a class="btn btn-outline" href=(Route::Products { category: None }.path()) { "View Products" }
                (whatsapp_button(&site.whatsapp, Some("Chat on WhatsApp")))
            }
        }
    }
}

/// Post page for `slug`; unknown slugs render the newest post.
pub fn article(site: &Site, slug: &str) -> Markup {
    let catalog = &site.articles;
    if catalog.get(slug).is_none() {
        tracing::debug!(slug, fallback = %catalog.default_item().slug(), "unknown article slug");
    }
    let post = catalog.find_by_slug(slug);

    html! {
        article class="container post" {
            nav class="breadcrumb" aria-label="Breadcrumb" {
                a href=(Route::Home.path()) { "Home" }
                " / "
                a href=(Route::Blog { category: None }.path()) { "Blog" }
                " / "
                span { (post.title()) }
            }
            a class="btn btn-outline" href=(Route::Blog { category: None }.path()) { "Back to Blog" }

            header class="post-header" {
                a href=(posts_in(post.category().to_string()).path()) { (badge(post.category())) }
                h1 { (post.title()) }
                p class="byline" {
                    "By " (post.author()) " · "
                    time datetime=(post.published().format("%Y-%m-%d")) {
                        (post.published().format("%B %-d, %Y"))
                    }
                    " · " (post.read_time())
                }
            }

            @for paragraph in post.body().split("\n\n") {
                p { (paragraph) }
            }

            div class="tags" {
                @for tag in post.tags() {
                    (badge(tag))
                }
            }
        }

        section class="container" {
            h2 { "More Insights" }
            div class="grid grid-3" {
                @for other in catalog.related(post, FEATURED_LIMIT) {
                    (article_card(other))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chicory_catalog::NewArticle;

    fn post(id: &str, title: &str, featured: bool) -> Article {
        Article::create(&NewArticle {
            id,
            title,
            excerpt: "Export notes.",
            body: "",
            author: "RSI Chicory Team",
            published: "2025-01-10",
            category: "Market Analysis",
            tags: &["Export"],
            featured,
            read_time: "4 min read",
        })
        .unwrap()
    }

    #[test]
    fn featured_strip_is_capped() {
        let titles = ["Roots Outlook", "Roast Profiles", "Extract Demand", "Freight Rates", "Crop Report"];
        let posts: Vec<Article> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| post(&(i + 1).to_string(), title, true))
            .collect();
        let catalog = Catalog::new(posts).unwrap();
        assert_eq!(catalog.list_featured().len(), titles.len());

        let html = featured_strip(&catalog).into_string();
        assert_eq!(html.matches("class=\"card article-card\"").count(), FEATURED_LIMIT);
        for title in &titles[..FEATURED_LIMIT] {
            assert!(html.contains(title), "{title}");
        }
        for title in &titles[FEATURED_LIMIT..] {
            assert!(!html.contains(title), "{title}");
        }
    }

    #[test]
    fn featured_strip_skips_unflagged_posts() {
        let catalog = Catalog::new(vec![
            post("1", "Roots Outlook", true),
            post("2", "Quiet Season", false),
        ])
        .unwrap();

        let html = featured_strip(&catalog).into_string();
        assert_eq!(html.matches("class=\"card article-card\"").count(), 1);
        assert!(!html.contains("Quiet Season"));
    }

    #[test]
    fn newsletter_has_no_form_endpoint() {
        let site = Site::load().unwrap();
        let html = blog_list(&site, None).into_string();
        assert!(html.contains("Enter your business email"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn unknown_article_renders_newest_post() {
        let site = Site::load().unwrap();
        let newest = site.articles.default_item();
        let html = article(&site, "missing").into_string();
        assert!(html.contains(&format!("<h1>{}</h1>", newest.title())));
    }
}
