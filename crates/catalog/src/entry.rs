//! The shape shared by every record a [`Catalog`](crate::Catalog) can index.

use chicory_core::{Entity, ItemId, Slug};

/// A product or article as seen by the catalog index.
pub trait CatalogEntry: Entity<Id = ItemId> {
    /// Display name.
    fn title(&self) -> &str;

    /// Lookup key for the detail page, derived from [`title`](Self::title).
    fn slug(&self) -> &Slug;

    /// Facet tag. Open set; compared as plain strings.
    fn category(&self) -> &str;

    /// Short free-text description shown on cards.
    fn summary(&self) -> &str;

    /// Ordered display-only labels (applications for products, tags for posts).
    fn tags(&self) -> &[String];

    /// Whether the record belongs to the highlight subset.
    fn is_featured(&self) -> bool;
}
