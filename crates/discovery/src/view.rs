//! Listing views: which products a page lists and which facets it offers.

use std::str::FromStr;

use paintshop_catalog::Product;
use paintshop_core::DomainError;

use crate::facets::FacetDefinition;
use crate::filter::OptionFacet;

pub const INTERIOR_CATEGORY: &str = "interior";
pub const EXTERIOR_CATEGORY: &str = "exterior";

const CATEGORY_FACETS: &[OptionFacet] = &[
    OptionFacet::Color,
    OptionFacet::Room,
    OptionFacet::Finish,
    OptionFacet::Brand,
    OptionFacet::Features,
];

const INTERIOR_FACETS: &[OptionFacet] = &[
    OptionFacet::Color,
    OptionFacet::Room,
    OptionFacet::SheenLevels,
    OptionFacet::Coverage,
    OptionFacet::Brand,
    OptionFacet::Features,
];

const EXTERIOR_FACETS: &[OptionFacet] = &[
    OptionFacet::Color,
    OptionFacet::WeatherResistance,
    OptionFacet::SurfaceTypes,
    OptionFacet::ApplicationType,
    OptionFacet::ClimateZones,
    OptionFacet::Brand,
];

const SEARCH_FACETS: &[OptionFacet] = &[
    OptionFacet::Category,
    OptionFacet::Color,
    OptionFacet::Brand,
    OptionFacet::Finish,
];

/// A listing surface. Every view also supports price, stock and rating filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// A category page; the slug is compared case-insensitively.
    Category(String),
    Interior,
    Exterior,
    /// Global search across the whole catalog.
    Search,
}

impl ViewKind {
    pub fn category(slug: &str) -> Self {
        ViewKind::Category(slug.trim().to_lowercase())
    }

    pub fn facets(&self) -> &'static [OptionFacet] {
        match self {
            ViewKind::Category(_) => CATEGORY_FACETS,
            ViewKind::Interior => INTERIOR_FACETS,
            ViewKind::Exterior => EXTERIOR_FACETS,
            ViewKind::Search => SEARCH_FACETS,
        }
    }

    /// Whether the view lists `product` at all.
    pub fn in_scope(&self, product: &Product) -> bool {
        let category = product.category.trim().to_lowercase();
        match self {
            ViewKind::Category(slug) => category == slug.trim().to_lowercase(),
            ViewKind::Interior => category == INTERIOR_CATEGORY,
            ViewKind::Exterior => category == EXTERIOR_CATEGORY,
            ViewKind::Search => true,
        }
    }

    /// Resolve this view's facet definitions against its scoped products.
    pub fn resolve_facets(&self, scoped: &[&Product]) -> Vec<FacetDefinition> {
        self.facets()
            .iter()
            .map(|facet| FacetDefinition::resolve(*facet, scoped.iter().copied()))
            .collect()
    }
}

impl core::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewKind::Category(slug) => write!(f, "category:{slug}"),
            ViewKind::Interior => f.write_str("interior"),
            ViewKind::Exterior => f.write_str("exterior"),
            ViewKind::Search => f.write_str("search"),
        }
    }
}

impl FromStr for ViewKind {
    type Err = DomainError;

    /// Accepts `search`, `interior`, `exterior` or `category:<slug>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(slug) = s.strip_prefix("category:") {
            if slug.trim().is_empty() {
                return Err(DomainError::validation("category view needs a slug"));
            }
            return Ok(ViewKind::category(slug));
        }
        match s.to_lowercase().as_str() {
            "search" => Ok(ViewKind::Search),
            "interior" => Ok(ViewKind::Interior),
            "exterior" => Ok(ViewKind::Exterior),
            other => Err(DomainError::validation(format!("unknown view '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintshop_catalog::fixtures::sample_catalog;

    fn scoped_ids(view: &ViewKind) -> Vec<String> {
        sample_catalog()
            .into_iter()
            .filter(|p| view.in_scope(p))
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn views_scope_by_category() {
        assert_eq!(scoped_ids(&ViewKind::Interior), vec!["int-001", "int-002", "int-003"]);
        assert_eq!(scoped_ids(&ViewKind::Exterior), vec!["ext-001", "ext-002"]);
        assert_eq!(scoped_ids(&ViewKind::Search).len(), 5);
        assert_eq!(scoped_ids(&ViewKind::category(" Exterior ")), vec!["ext-001", "ext-002"]);
        assert!(scoped_ids(&ViewKind::category("primers")).is_empty());
    }

    #[test]
    fn unnormalized_category_variant_still_scopes() {
        let view = ViewKind::Category(" Exterior".to_string());
        assert_eq!(scoped_ids(&view), vec!["ext-001", "ext-002"]);
    }

    #[test]
    fn exterior_offers_weather_resistance_and_interior_does_not() {
        assert!(ViewKind::Exterior.facets().contains(&OptionFacet::WeatherResistance));
        assert!(!ViewKind::Interior.facets().contains(&OptionFacet::WeatherResistance));
        assert!(ViewKind::Interior.facets().contains(&OptionFacet::SheenLevels));
        assert!(ViewKind::Interior.facets().contains(&OptionFacet::Coverage));
    }

    #[test]
    fn derived_options_come_from_scoped_products() {
        let catalog = sample_catalog();
        let scoped: Vec<&Product> = catalog
            .iter()
            .filter(|p| ViewKind::Exterior.in_scope(p))
            .collect();
        let defs = ViewKind::Exterior.resolve_facets(&scoped);
        let brands = defs.iter().find(|d| d.facet == OptionFacet::Brand).unwrap();
        let ids: Vec<_> = brands.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["stonecraft", "summit paints"]);
    }

    #[test]
    fn parses_and_displays_views() {
        for raw in ["search", "interior", "exterior", "category:ceiling"] {
            let view: ViewKind = raw.parse().unwrap();
            assert_eq!(view.to_string(), raw);
        }
        assert!("category:".parse::<ViewKind>().is_err());
        assert!("garden".parse::<ViewKind>().is_err());
    }
}
