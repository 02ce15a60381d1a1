//! Filter predicate composition.
//!
//! Options within one facet are OR-ed; active facets and the scalar
//! dimensions (price, stock, rating) are AND-ed.

use paintshop_catalog::Product;

use crate::classify::{self, ColorFamily, CoverageTier, SheenBucket};
use crate::facets::{self, FacetDefinition, OptionSource};
use crate::filter::{FilterState, OptionFacet, PriceRange};

/// Whether `product` satisfies a single option of `facet`.
///
/// Total: an option id the facet cannot interpret matches nothing.
pub fn option_matches(facet: OptionFacet, option: &str, product: &Product) -> bool {
    match facet.option_source() {
        OptionSource::ColorFamilies => ColorFamily::from_slug(option).is_some_and(|family| {
            product
                .colors
                .iter()
                .any(|c| classify::color_family(&c.name) == family)
        }),
        OptionSource::SheenBuckets => SheenBucket::from_slug(option).is_some_and(|bucket| {
            product
                .finishes
                .iter()
                .any(|f| classify::sheen_bucket(&f.sheen) == bucket)
        }),
        OptionSource::CoverageTiers => CoverageTier::from_slug(option)
            .is_some_and(|tier| classify::coverage_tier(&product.coverage) == tier),
        OptionSource::Keywords(_) => keyword_matches(option, product),
        OptionSource::CatalogDerived => facets::derived_values(facet, product)
            .into_iter()
            .any(|raw| facets::option_id(raw) == option),
    }
}

/// Keyword ids use dashes for spaces (`"living-room"` finds "living room").
fn keyword_matches(option: &str, product: &Product) -> bool {
    let keyword = option.replace('-', " ").to_lowercase();
    if keyword.trim().is_empty() {
        return false;
    }
    product
        .features
        .iter()
        .any(|f| f.to_lowercase().contains(&keyword))
        || product.description.to_lowercase().contains(&keyword)
}

/// One AND-ed facet clause: the product must match any of `options`.
#[derive(Debug, Clone)]
struct OptionClause<'a> {
    facet: OptionFacet,
    options: Vec<&'a str>,
}

/// The conjunction of every active filter for one listing.
#[derive(Debug, Clone, Default)]
pub struct CompositePredicate<'a> {
    clauses: Vec<OptionClause<'a>>,
    price: Option<PriceRange>,
    in_stock_only: bool,
    min_rating: u8,
}

impl CompositePredicate<'_> {
    pub fn matches(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        if self.min_rating > 0 && product.rating < f64::from(self.min_rating) {
            return false;
        }
        if let Some(range) = &self.price {
            if !range.contains(product.base_price) {
                return false;
            }
        }
        self.clauses.iter().all(|clause| {
            clause
                .options
                .iter()
                .any(|option| option_matches(clause.facet, option, product))
        })
    }

    /// True when the predicate accepts every product.
    pub fn is_unrestricted(&self) -> bool {
        self.clauses.is_empty()
            && self.price.is_none()
            && !self.in_stock_only
            && self.min_rating == 0
    }
}

/// Compose every active filter of `state` against the listing's facets.
pub fn compose<'a>(state: &'a FilterState, facets: &[FacetDefinition]) -> CompositePredicate<'a> {
    build(state, facets, None)
}

/// Like [`compose`], leaving out `excluded` (used for exclude-self counts).
pub fn compose_excluding<'a>(
    state: &'a FilterState,
    facets: &[FacetDefinition],
    excluded: OptionFacet,
) -> CompositePredicate<'a> {
    build(state, facets, Some(excluded))
}

fn build<'a>(
    state: &'a FilterState,
    facets: &[FacetDefinition],
    excluded: Option<OptionFacet>,
) -> CompositePredicate<'a> {
    let mut clauses = Vec::new();

    for (facet, selected) in state.active_option_facets() {
        if Some(facet) == excluded {
            continue;
        }
        let Some(definition) = facets.iter().find(|d| d.facet == facet) else {
            tracing::debug!(facet = facet.param_key(), "facet not offered by this view; ignoring");
            continue;
        };

        // Unknown ids are dropped; a clause left empty matches nothing.
        let options = selected
            .iter()
            .map(String::as_str)
            .filter(|id| definition.has_option(id))
            .collect();
        clauses.push(OptionClause { facet, options });
    }

    CompositePredicate {
        clauses,
        price: state.price_range(),
        in_stock_only: state.in_stock_only(),
        min_rating: state.min_rating(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintshop_catalog::fixtures::{ProductBuilder, sample_catalog};

    fn definitions(products: &[Product], facets: &[OptionFacet]) -> Vec<FacetDefinition> {
        facets
            .iter()
            .map(|f| FacetDefinition::resolve(*f, products))
            .collect()
    }

    fn ids(products: &[Product], predicate: &CompositePredicate<'_>) -> Vec<String> {
        products
            .iter()
            .filter(|p| predicate.matches(p))
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn empty_state_matches_everything() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &OptionFacet::ALL);
        let state = FilterState::new();
        let predicate = compose(&state, &defs);
        assert!(predicate.is_unrestricted());
        assert_eq!(ids(&catalog, &predicate).len(), catalog.len());
    }

    #[test]
    fn options_within_a_facet_are_or_ed() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Color]);
        let state = FilterState::new().with_options(OptionFacet::Color, ["blues", "grays"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-002", "int-003"]);
    }

    #[test]
    fn facets_are_and_ed() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Color, OptionFacet::Brand]);
        let state = FilterState::new()
            .with_options(OptionFacet::Color, ["greens", "blues"])
            .with_options(OptionFacet::Brand, ["summit paints"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-002", "ext-001"]);

        let state = state.with_options(OptionFacet::Brand, ["harbor coatings"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-001"]);
    }

    #[test]
    fn unknown_option_matches_nothing() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Color, OptionFacet::Brand]);
        let state = FilterState::new().with_options(OptionFacet::Color, ["purples"]);
        assert!(ids(&catalog, &compose(&state, &defs)).is_empty());

        let state = FilterState::new().with_options(OptionFacet::Brand, ["nobody"]);
        assert!(ids(&catalog, &compose(&state, &defs)).is_empty());
    }

    #[test]
    fn unknown_option_does_not_block_known_siblings() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Color]);
        let state = FilterState::new().with_options(OptionFacet::Color, ["purples", "blues"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-002"]);
    }

    #[test]
    fn facets_outside_the_view_impose_no_restriction() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Color]);
        let state = FilterState::new().with_options(OptionFacet::WeatherResistance, ["excellent"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)).len(), catalog.len());
    }

    #[test]
    fn keyword_facets_match_features_or_description() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Room, OptionFacet::Features]);

        let state = FilterState::new().with_options(OptionFacet::Room, ["living-room"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-001"]);

        let state = FilterState::new().with_options(OptionFacet::Room, ["kitchen", "bedroom"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-002", "int-003"]);

        let state = FilterState::new().with_options(OptionFacet::Features, ["low-voc"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-001"]);
    }

    #[test]
    fn sheen_and_coverage_use_classifiers() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::SheenLevels, OptionFacet::Coverage]);

        let state = FilterState::new().with_options(OptionFacet::SheenLevels, ["satin"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-001", "ext-001"]);

        let state = FilterState::new().with_options(OptionFacet::Coverage, ["premium"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-002"]);
    }

    #[test]
    fn derived_multi_value_facets_match_any_value() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::SurfaceTypes, OptionFacet::Finish]);

        let state =
            FilterState::new().with_options(OptionFacet::SurfaceTypes, ["vinyl", "masonry"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["ext-001", "ext-002"]);

        let state = FilterState::new().with_options(OptionFacet::Finish, ["flat"]);
        assert_eq!(ids(&catalog, &compose(&state, &defs)), vec!["int-003", "ext-002"]);
    }

    #[test]
    fn scalar_dimensions() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[]);

        let state = FilterState::new().with_in_stock_only(true);
        assert!(!ids(&catalog, &compose(&state, &defs)).contains(&"int-003".to_string()));

        let state = FilterState::new().with_min_rating(4);
        assert_eq!(
            ids(&catalog, &compose(&state, &defs)),
            vec!["int-001", "int-002", "ext-001", "ext-002"]
        );

        let state = FilterState::new().with_price_range(4_299, Some(5_999));
        assert_eq!(
            ids(&catalog, &compose(&state, &defs)),
            vec!["int-001", "int-002", "ext-002"]
        );
    }

    #[test]
    fn rating_threshold_is_inclusive() {
        let product = ProductBuilder::new("p").rating(4.0).build();
        let state = FilterState::new().with_min_rating(4);
        assert!(compose(&state, &[]).matches(&product));
    }

    #[test]
    fn compose_excluding_drops_only_that_facet() {
        let catalog = sample_catalog();
        let defs = definitions(&catalog, &[OptionFacet::Color, OptionFacet::Brand]);
        let state = FilterState::new()
            .with_options(OptionFacet::Color, ["reds"])
            .with_options(OptionFacet::Brand, ["stonecraft"]);
        assert!(ids(&catalog, &compose(&state, &defs)).is_empty());
        assert_eq!(
            ids(&catalog, &compose_excluding(&state, &defs, OptionFacet::Color)),
            vec!["ext-002"]
        );
    }
}
