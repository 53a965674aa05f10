//! Catalog index: featured subset, category facets, slug lookup.

use std::collections::{HashMap, HashSet};

use chicory_core::{DomainError, DomainResult, Slug};

use crate::entry::CatalogEntry;

/// Immutable, ordered collection of catalog records.
///
/// Construction enforces that the catalog is non-empty and that ids and slugs
/// are unique, so every lookup below is total.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    by_slug: HashMap<Slug, usize>,
    default_index: usize,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog whose default item is the first record.
    pub fn new(items: Vec<T>) -> DomainResult<Self> {
        Self::build(items, None)
    }

    /// Build a catalog with an explicitly designated default item.
    pub fn with_default(items: Vec<T>, default_slug: &str) -> DomainResult<Self> {
        Self::build(items, Some(default_slug))
    }

    fn build(items: Vec<T>, default_slug: Option<&str>) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::invariant("catalog needs at least one item"));
        }

        let mut by_slug = HashMap::with_capacity(items.len());
        let mut ids = HashSet::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if !ids.insert(item.id().clone()) {
                return Err(DomainError::conflict(format!("duplicate item id {}", item.id())));
            }
            if by_slug.insert(item.slug().clone(), pos).is_some() {
                return Err(DomainError::conflict(format!("duplicate slug {}", item.slug())));
            }
        }

        let default_index = match default_slug {
            None => 0,
            Some(slug) => *by_slug.get(slug).ok_or_else(|| {
                DomainError::invariant(format!("default slug {slug} is not in the catalog"))
            })?,
        };

        Ok(Self {
            items,
            by_slug,
            default_index,
        })
    }

    /// All records in source order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The record served when a slug lookup misses.
    pub fn default_item(&self) -> &T {
        &self.items[self.default_index]
    }

    /// Exact lookup; `None` on a miss.
    pub fn get(&self, slug: &str) -> Option<&T> {
        self.by_slug.get(slug).map(|&pos| &self.items[pos])
    }

    /// Lookup that always yields a renderable record: the match, or the
    /// default item.
    pub fn find_by_slug(&self, slug: &str) -> &T {
        self.get(slug).unwrap_or_else(|| self.default_item())
    }

    /// Featured records, in source order.
    pub fn list_featured(&self) -> Vec<&T> {
        self.items.iter().filter(|item| item.is_featured()).collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn list_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Records tagged with `category`, in source order.
    pub fn in_category(&self, category: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }

    /// Up to `limit` other records for a "related" strip: same category first,
    /// then the rest, each group in source order.
    pub fn related(&self, item: &T, limit: usize) -> Vec<&T> {
        let others = || self.items.iter().filter(|other| other.id() != item.id());
        others()
            .filter(|other| other.category() == item.category())
            .chain(others().filter(|other| other.category() != item.category()))
            .take(limit)
            .collect()
    }
}
