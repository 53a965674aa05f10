//! URL slugs derived from display titles.
//!
//! Every link to a detail page and every catalog lookup key goes through
//! [`slugify`], so a slug built for navigation always matches the slug stored
//! in the catalog.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Derive a URL slug from a title.
///
/// Lowercases, turns whitespace runs into a single `-`, strips parentheses and
/// drops anything else outside `[a-z0-9-]`. Hyphens never repeat and never
/// lead or trail.
///
/// `"Roasted Chicory Cubes (Dark Roast)"` becomes
/// `"roasted-chicory-cubes-dark-roast"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = !slug.is_empty();
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
        // Parentheses and other punctuation are dropped without a separator.
    }

    slug
}

/// Check that `slug` is lowercase kebab-case (`[a-z0-9]+(-[a-z0-9]+)*`).
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    let is_valid = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if is_valid {
        Ok(())
    } else {
        Err(DomainError::invalid_id(format!(
            "slug must be lowercase kebab-case: {slug:?}"
        )))
    }
}

/// A validated slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Derive the slug for a title. Fails when the title has no sluggable
    /// characters at all.
    pub fn from_title(title: &str) -> Result<Self, DomainError> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(DomainError::invalid_id(format!(
                "title {title:?} yields an empty slug"
            )));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_slug(&value)?;
        Ok(Self(value))
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl core::str::FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}
