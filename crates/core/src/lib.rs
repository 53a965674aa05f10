//! `chicory-core`: shared building blocks for the RSI Chicory site.
//!
//! Pure functions and types only (no HTTP, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod slug;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use slug::{slugify, validate_slug, Slug};
