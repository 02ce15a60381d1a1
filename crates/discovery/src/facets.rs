//! Facet definitions: which options a facet offers in a given listing.
//!
//! Static facets carry a fixed option list backed by a classifier or a
//! keyword; catalog-derived facets offer the distinct (lowercased) values
//! present in the listing's products.

use std::collections::BTreeMap;

use serde::Serialize;

use paintshop_catalog::Product;

use crate::classify::{ColorFamily, CoverageTier, SheenBucket};
use crate::filter::OptionFacet;

/// Room keywords, matched against features and description.
pub const ROOM_OPTIONS: &[(&str, &str)] = &[
    ("living-room", "Living Room"),
    ("bedroom", "Bedroom"),
    ("kitchen", "Kitchen"),
    ("bathroom", "Bathroom"),
    ("dining-room", "Dining Room"),
    ("hallway", "Hallway"),
    ("office", "Office"),
    ("nursery", "Nursery"),
];

/// Feature keywords, matched against features and description.
pub const FEATURE_OPTIONS: &[(&str, &str)] = &[
    ("low-voc", "Low VOC"),
    ("scrubbable", "Scrubbable"),
    ("washable", "Washable"),
    ("mildew-resistant", "Mildew Resistant"),
    ("one-coat", "One Coat"),
    ("stain-blocking", "Stain Blocking"),
    ("uv-resistant", "UV Resistant"),
    ("primer-included", "Primer Included"),
];

/// Where a facet's options come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    ColorFamilies,
    SheenBuckets,
    CoverageTiers,
    Keywords(&'static [(&'static str, &'static str)]),
    CatalogDerived,
}

impl OptionFacet {
    pub fn option_source(self) -> OptionSource {
        match self {
            OptionFacet::Color => OptionSource::ColorFamilies,
            OptionFacet::SheenLevels => OptionSource::SheenBuckets,
            OptionFacet::Coverage => OptionSource::CoverageTiers,
            OptionFacet::Room => OptionSource::Keywords(ROOM_OPTIONS),
            OptionFacet::Features => OptionSource::Keywords(FEATURE_OPTIONS),
            OptionFacet::Category
            | OptionFacet::Finish
            | OptionFacet::Brand
            | OptionFacet::WeatherResistance
            | OptionFacet::ApplicationType
            | OptionFacet::SurfaceTypes
            | OptionFacet::ClimateZones => OptionSource::CatalogDerived,
        }
    }
}

/// Raw attribute values a catalog-derived facet reads from a product.
///
/// Static facets have no raw values and yield an empty list.
pub fn derived_values(facet: OptionFacet, product: &Product) -> Vec<&str> {
    match facet {
        OptionFacet::Category => vec![product.category.as_str()],
        OptionFacet::Brand => vec![product.brand.as_str()],
        OptionFacet::Finish => product.finishes.iter().map(|f| f.name.as_str()).collect(),
        OptionFacet::WeatherResistance => {
            product.weather_resistance.as_deref().into_iter().collect()
        }
        OptionFacet::ApplicationType => {
            product.application_types.iter().map(String::as_str).collect()
        }
        OptionFacet::SurfaceTypes => product.surface_types.iter().map(String::as_str).collect(),
        OptionFacet::ClimateZones => product.climate_zones.iter().map(String::as_str).collect(),
        OptionFacet::Color
        | OptionFacet::Room
        | OptionFacet::SheenLevels
        | OptionFacet::Coverage
        | OptionFacet::Features => Vec::new(),
    }
}

/// Canonical option id for a raw attribute value.
///
/// Lowercased with commas dropped and whitespace collapsed, so the id
/// survives comma-separated selection and URL round-trips unchanged.
pub fn option_id(raw: &str) -> String {
    raw.replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
}

impl FacetOption {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// A facet with its options resolved for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetDefinition {
    pub facet: OptionFacet,
    pub label: String,
    pub options: Vec<FacetOption>,
}

impl FacetDefinition {
    /// Resolve the option list of `facet` against the listing's products.
    pub fn resolve<'a>(
        facet: OptionFacet,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Self {
        let options = match facet.option_source() {
            OptionSource::ColorFamilies => ColorFamily::ALL
                .iter()
                .map(|f| FacetOption::new(f.as_str(), f.label()))
                .collect(),
            OptionSource::SheenBuckets => SheenBucket::ALL
                .iter()
                .map(|b| FacetOption::new(b.as_str(), b.label()))
                .collect(),
            OptionSource::CoverageTiers => CoverageTier::ALL
                .iter()
                .map(|t| FacetOption::new(t.as_str(), t.label()))
                .collect(),
            OptionSource::Keywords(keywords) => keywords
                .iter()
                .map(|(id, label)| FacetOption::new(id, label))
                .collect(),
            OptionSource::CatalogDerived => {
                // First-seen spelling becomes the label.
                let mut distinct: BTreeMap<String, String> = BTreeMap::new();
                for product in products {
                    for raw in derived_values(facet, product) {
                        let id = option_id(raw);
                        if id.is_empty() {
                            continue;
                        }
                        distinct.entry(id).or_insert_with(|| raw.trim().to_string());
                    }
                }
                distinct
                    .into_iter()
                    .map(|(id, label)| FacetOption { id, label })
                    .collect()
            }
        };

        Self {
            facet,
            label: facet.label().to_string(),
            options,
        }
    }

    pub fn has_option(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }
}
