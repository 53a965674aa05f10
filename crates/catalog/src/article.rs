use chrono::NaiveDate;
use serde::Serialize;

use chicory_core::{DomainError, Entity, ItemId, Slug};

use crate::entry::CatalogEntry;
use crate::product::owned;

/// An industry-insights blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ItemId,
    title: String,
    slug: Slug,
    excerpt: String,
    body: String,
    author: String,
    published: NaiveDate,
    category: String,
    tags: Vec<String>,
    featured: bool,
    read_time: String,
}

/// Borrowed input for [`Article::create`].
#[derive(Debug, Clone, Copy)]
pub struct NewArticle<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub excerpt: &'a str,
    pub body: &'a str,
    pub author: &'a str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'a str,
    pub category: &'a str,
    pub tags: &'a [&'a str],
    pub featured: bool,
    pub read_time: &'a str,
}

impl Article {
    pub fn create(new: &NewArticle<'_>) -> Result<Self, DomainError> {
        if new.title.trim().is_empty() {
            return Err(DomainError::validation("article title cannot be empty"));
        }
        let published = NaiveDate::parse_from_str(new.published, "%Y-%m-%d").map_err(|e| {
            DomainError::validation(format!(
                "article {:?} has bad date {:?}: {e}",
                new.title, new.published
            ))
        })?;

        Ok(Self {
            id: ItemId::new(new.id)?,
            title: new.title.to_string(),
            slug: Slug::from_title(new.title)?,
            excerpt: new.excerpt.to_string(),
            body: new.body.to_string(),
            author: new.author.to_string(),
            published,
            category: new.category.to_string(),
            tags: owned(new.tags),
            featured: new.featured,
            read_time: new.read_time.to_string(),
        })
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Full text; falls back to the excerpt while a post has no body yet.
    pub fn body(&self) -> &str {
        if self.body.trim().is_empty() {
            &self.excerpt
        } else {
            &self.body
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published(&self) -> NaiveDate {
        self.published
    }

    pub fn read_time(&self) -> &str {
        &self.read_time
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

impl Entity for Article {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl CatalogEntry for Article {
    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
