//! # zen-index
//!
//! In-memory reverse indexes and the query engine for zen-search.
//!
//! ## Features
//! - One [`GroupIndex`] per group: field -> lowercased value -> records
//! - Exact, case-insensitive matching via [`Catalog::find_matches`]
//! - Loose foreign-key expansion across groups via [`Catalog::find_related`]
//! - Group and term introspection for menus
//!
//! A [`Catalog`] is immutable once built and safe to share behind an `Arc`.

pub mod catalog;
pub mod error;
pub mod index;
pub mod relate;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::IndexError;
pub use index::{Bucket, GroupIndex};
pub use relate::{FieldMatch, RelatedRecords};
