//! Facet option counts for filter badges.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use paintshop_catalog::Product;
use paintshop_core::DomainError;

use crate::facets::FacetDefinition;
use crate::filter::{FilterState, OptionFacet};
use crate::predicate::{compose_excluding, option_matches};

/// facet → option id → count. Every defined option is present, zeros included.
pub type FacetCounts = BTreeMap<OptionFacet, BTreeMap<String, usize>>;

/// How facet counts are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacetCountMode {
    /// Count against every other active filter plus the option itself:
    /// "if I also pick this, N results remain".
    #[default]
    ExcludeSelf,
    /// Count each option against the unfiltered listing.
    FullCatalog,
}

impl FacetCountMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FacetCountMode::ExcludeSelf => "exclude-self",
            FacetCountMode::FullCatalog => "full-catalog",
        }
    }
}

impl FromStr for FacetCountMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclude-self" => Ok(FacetCountMode::ExcludeSelf),
            "full-catalog" => Ok(FacetCountMode::FullCatalog),
            other => Err(DomainError::validation(format!(
                "unknown facet count mode '{other}' (expected exclude-self or full-catalog)"
            ))),
        }
    }
}

/// Exclude-self counts over `products` (the listing after text search).
///
/// For each facet the products passing all *other* active filters are
/// computed once, then tested against each option.
pub fn exclude_self_counts(
    products: &[&Product],
    state: &FilterState,
    facets: &[FacetDefinition],
) -> FacetCounts {
    facets
        .iter()
        .map(|definition| {
            let predicate = compose_excluding(state, facets, definition.facet);
            let base: Vec<&Product> = products
                .iter()
                .copied()
                .filter(|p| predicate.matches(p))
                .collect();
            (definition.facet, count_options(definition, &base))
        })
        .collect()
}

/// Full-catalog counts: each option alone against `products`.
pub fn full_catalog_counts(products: &[&Product], facets: &[FacetDefinition]) -> FacetCounts {
    facets
        .iter()
        .map(|definition| (definition.facet, count_options(definition, products)))
        .collect()
}

fn count_options(definition: &FacetDefinition, products: &[&Product]) -> BTreeMap<String, usize> {
    definition
        .options
        .iter()
        .map(|option| {
            let count = products
                .iter()
                .filter(|p| option_matches(definition.facet, &option.id, p))
                .count();
            (option.id.clone(), count)
        })
        .collect()
}
