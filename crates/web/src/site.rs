//! Immutable site content shared by every request.

use chicory_catalog::{Article, Catalog, Product, article_catalog, product_catalog};
use chicory_contact::{CompanyContact, RSI_CHICORY, WhatsAppLink};
use chicory_core::DomainResult;

/// Catalogs and contact channels, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Site {
    pub products: Catalog<Product>,
    pub articles: Catalog<Article>,
    pub company: CompanyContact,
    pub whatsapp: WhatsAppLink,
}

impl Site {
    /// Build the RSI Chicory site. Fails only if the seed content breaks a
    /// catalog invariant (duplicate slug, empty catalog).
    pub fn load() -> DomainResult<Self> {
        let products = product_catalog()?;
        let articles = article_catalog()?;

        tracing::info!(
            products = products.len(),
            product_categories = products.list_categories().len(),
            articles = articles.len(),
            "site content loaded"
        );

        Ok(Self {
            products,
            articles,
            company: RSI_CHICORY,
            whatsapp: WhatsAppLink::sales()?,
        })
    }
}
