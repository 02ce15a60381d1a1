//! Faceted product discovery for the paint catalog.
//!
//! Turns (catalog, active filters, free-text query, sort key, page) into a
//! displayable page plus facet counts. The same engine serves every listing
//! view; views differ only in scope and facet set (see [`view::ViewKind`]).
//!
//! Evaluation is synchronous and deterministic: no IO, no mutation of inputs.

pub mod classify;
pub mod config;
pub mod counts;
pub mod engine;
pub mod facets;
pub mod filter;
pub mod paginate;
pub mod params;
pub mod predicate;
pub mod search;
pub mod sort;
pub mod view;

pub use config::EngineConfig;
pub use counts::{FacetCountMode, FacetCounts};
pub use engine::{DiscoveryEngine, DiscoveryResult};
pub use facets::{FacetDefinition, FacetOption};
pub use filter::{FilterState, OptionFacet, PriceRange};
pub use paginate::{Page, paginate};
pub use params::DiscoveryQuery;
pub use sort::SortKey;
pub use view::ViewKind;
