//! Catalog domain module.
//!
//! Static product and article records plus the index that serves them:
//! featured subsets, category facets and slug lookup with a default fallback.
//! Pure data and lookups (no IO, no HTTP, no rendering).

pub mod article;
pub mod entry;
pub mod index;
pub mod product;
pub mod seed;

pub use article::{Article, NewArticle};
pub use entry::CatalogEntry;
pub use index::Catalog;
pub use product::{NewProduct, Product, ProductDetail, Specification};
pub use seed::{article_catalog, product_catalog};
