//! Paint catalog data model and catalog sources.
//!
//! This crate owns what a product *is* (and when a record is acceptable) plus
//! the collaborator seam the discovery engine reads catalogs through. It holds
//! no filtering or ranking logic.

pub mod error;
pub mod product;
pub mod snapshot;
pub mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use error::CatalogError;
pub use product::{ColorOption, Finish, Product};
pub use snapshot::CatalogSnapshot;
pub use source::{CatalogSource, JsonFileCatalog, StaticCatalog};
