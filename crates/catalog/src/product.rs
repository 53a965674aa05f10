use serde::Serialize;

use chicory_core::{DomainError, Entity, ItemId, Slug};

use crate::entry::CatalogEntry;

/// One row of a product's technical sheet (e.g. `Moisture: 4-6%`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// Long-form detail shown on a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub overview: String,
    pub origin: String,
    pub processing: String,
    pub specifications: Vec<Specification>,
    pub features: Vec<String>,
}

/// A product in the wholesale catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ItemId,
    name: String,
    slug: Slug,
    description: String,
    category: String,
    applications: Vec<String>,
    form: String,
    price_range: String,
    moq: String,
    featured: bool,
    detail: ProductDetail,
}

/// Borrowed input for [`Product::create`]; lets static content be written as
/// plain string literals.
#[derive(Debug, Clone, Copy)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub applications: &'a [&'a str],
    pub form: &'a str,
    pub price_range: &'a str,
    pub moq: &'a str,
    pub featured: bool,
    pub overview: &'a str,
    pub origin: &'a str,
    pub processing: &'a str,
    pub specifications: &'a [(&'a str, &'a str)],
    pub features: &'a [&'a str],
}

impl Product {
    /// Build a product, deriving its slug from the name.
    pub fn create(new: &NewProduct<'_>) -> Result<Self, DomainError> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if new.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has no category",
                new.name
            )));
        }

        Ok(Self {
            id: ItemId::new(new.id)?,
            name: new.name.to_string(),
            slug: Slug::from_title(new.name)?,
            description: new.description.to_string(),
            category: new.category.to_string(),
            applications: owned(new.applications),
            form: new.form.to_string(),
            price_range: new.price_range.to_string(),
            moq: new.moq.to_string(),
            featured: new.featured,
            detail: ProductDetail {
                overview: new.overview.to_string(),
                origin: new.origin.to_string(),
                processing: new.processing.to_string(),
                specifications: new
                    .specifications
                    .iter()
                    .map(|(label, value)| Specification {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
                features: owned(new.features),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn applications(&self) -> &[String] {
        &self.applications
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn price_range(&self) -> &str {
        &self.price_range
    }

    /// Minimum order quantity, as displayed (e.g. `"500 kg"`).
    pub fn moq(&self) -> &str {
        &self.moq
    }

    pub fn detail(&self) -> &ProductDetail {
        &self.detail
    }

    /// Site-relative URL of the detail page.
    pub fn path(&self) -> String {
        format!("/products/{}", self.slug)
    }
}

impl Entity for Product {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl CatalogEntry for Product {
    fn title(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.applications
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample<'a>() -> NewProduct<'a> {
        NewProduct {
            id: "6",
            name: "Liquid Chicory Extract",
            description: "Concentrated liquid chicory extract.",
            category: "Extracts",
            applications: &["Beverage Industry", "Instant Coffee"],
            form: "Liquid",
            price_range: "₹120-180/kg",
            moq: "50 kg",
            featured: true,
            overview: "",
            origin: "India",
            processing: "",
            specifications: &[("Concentration", "60-65%")],
            features: &["High concentration"],
        }
    }

    #[test]
    fn create_derives_slug_from_name() {
        let product = Product::create(&sample()).unwrap();
        assert_eq!(product.slug().as_str(), "liquid-chicory-extract");
        assert_eq!(product.path(), "/products/liquid-chicory-extract");
        assert_eq!(product.title(), "Liquid Chicory Extract");
        assert_eq!(product.tags(), product.applications());
        assert_eq!(product.detail().specifications[0].label, "Concentration");
    }

    #[test]
    fn create_rejects_blank_name() {
        let new = NewProduct {
            name: "   ",
            ..sample()
        };
        assert!(matches!(Product::create(&new), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_rejects_blank_category() {
        let new = NewProduct {
            category: "",
            ..sample()
        };
        assert!(matches!(Product::create(&new), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_rejects_blank_id() {
        let new = NewProduct { id: "", ..sample() };
        assert!(matches!(Product::create(&new), Err(DomainError::InvalidId(_))));
    }
}
