use std::sync::Arc;

use anyhow::Context;

use chicory_web::{app::build_app, Site, SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env()?;
    chicory_observability::init(config.log_format);
    SiteConfig::log_defaults(|key| std::env::var(key).ok());

    let site = Arc::new(Site::load().context("site content is inconsistent")?);
    let app = build_app(site);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
