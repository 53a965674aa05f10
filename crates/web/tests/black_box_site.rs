use std::sync::Arc;

use reqwest::StatusCode;

use chicory_web::{app::build_app, Site};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let site = Arc::new(Site::load().expect("seed content is consistent"));
        let app = build_app(site);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn get_text(client: &reqwest::Client, url: String) -> (StatusCode, String) {
    let res = client.get(url).send().await.unwrap();
    let status = res.status();
    (status, res.text().await.unwrap())
}

#[tokio::test]
async fn every_page_answers_ok() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for path in [
        "/",
        "/products",
        "/products?category=Roasted%20Products",
        "/products/roasted-chicory-cubes-dark-roast",
        "/about",
        "/blog",
        "/blog?category=Supply+Chain",
        "/contact",
        "/privacy",
        "/sitemap",
        "/health",
    ] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn pages_are_html_and_stylesheet_is_css() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/about")).send().await.unwrap();
    let content_type = res.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let res = client.get(srv.url("/style.css")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/css"), "{content_type}");
}

#[tokio::test]
async fn unknown_product_slug_falls_back_to_raw_roots() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, srv.url("/products/does-not-exist")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Raw Chicory Roots</h1>"));
}

#[tokio::test]
async fn category_filter_narrows_product_grid() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (_, body) = get_text(&client, srv.url("/products?category=Extracts")).await;
    assert!(body.contains("href=\"/products/liquid-chicory-extract\""));
    assert_eq!(body.matches("class=\"card product-card\"").count(), 1);
}

#[tokio::test]
async fn contact_post_acknowledges_and_clears_form() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/contact"))
        .form(&[
            ("name", "Asha Rao"),
            ("company", "Acme Roasters"),
            ("email", "asha@acme.example"),
            ("productInterest", "Roasted granules"),
            ("unexpected", "ignored"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert!(body.contains("Inquiry Submitted"));
    assert!(body.contains("Thank you for your interest. Our team will contact you within 24 hours."));
    assert!(!body.contains("Acme Roasters"));
    assert!(!body.contains("ignored"));
}

#[tokio::test]
async fn empty_contact_post_still_acknowledges() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/contact"))
        .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Inquiry Submitted"));
}

#[tokio::test]
async fn unknown_paths_are_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, srv.url("/pricing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));

    let res = client.get(srv.url("/api/orders")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn trailing_slash_spellings_redirect_to_canonical_pages() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    for (requested, canonical) in [
        ("/about/", "/about"),
        ("/products/?category=Roasted+Products", "/products?category=Roasted%20Products"),
        ("/blog/chicory-export-opportunities-in-global-coffee-markets-2025/",
         "/blog/chicory-export-opportunities-in-global-coffee-markets-2025"),
    ] {
        let res = client.get(srv.url(requested)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT, "{requested}");
        assert_eq!(res.headers()["location"], canonical, "{requested}");
    }

    // Following the redirect lands on the filtered page.
    let (status, body) = get_text(&reqwest::Client::new(), srv.url("/products/?category=Extracts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"card product-card\"").count(), 1);
    assert!(body.contains("Liquid Chicory Extract"));

    // Only reads are redirected.
    let res = client.post(srv.url("/about/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn json_feed_lists_catalogs() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let products: serde_json::Value = client
        .get(srv.url("/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(products["items"].as_array().unwrap().len(), 8);
    assert_eq!(products["categories"][0], "Raw Materials");

    let posts: serde_json::Value = client
        .get(srv.url("/api/posts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posts["items"].as_array().unwrap().len(), 6);

    let fallback: serde_json::Value = client
        .get(srv.url("/api/products/nope"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fallback["slug"], "raw-chicory-roots");
}
