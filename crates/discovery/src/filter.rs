//! Active filter selections.
//!
//! `FilterState` is a normalized value: option ids are trimmed, lowercased and
//! comma-free, a facet with no selected options is absent, and default scalar
//! dimensions are stored in their default form. Two states that filter the
//! same way therefore compare (and hash) equal.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Highest selectable "N stars and up" threshold.
pub const MAX_MIN_RATING: u8 = 5;

/// Multi-select facet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionFacet {
    Category,
    Color,
    Room,
    Finish,
    Brand,
    SheenLevels,
    Coverage,
    Features,
    WeatherResistance,
    ApplicationType,
    SurfaceTypes,
    ClimateZones,
}

impl OptionFacet {
    pub const ALL: [OptionFacet; 12] = [
        OptionFacet::Category,
        OptionFacet::Color,
        OptionFacet::Room,
        OptionFacet::Finish,
        OptionFacet::Brand,
        OptionFacet::SheenLevels,
        OptionFacet::Coverage,
        OptionFacet::Features,
        OptionFacet::WeatherResistance,
        OptionFacet::ApplicationType,
        OptionFacet::SurfaceTypes,
        OptionFacet::ClimateZones,
    ];

    /// URL query parameter key (also the facet id in facet-count maps).
    pub fn param_key(self) -> &'static str {
        match self {
            OptionFacet::Category => "category",
            OptionFacet::Color => "color",
            OptionFacet::Room => "room",
            OptionFacet::Finish => "finish",
            OptionFacet::Brand => "brand",
            OptionFacet::SheenLevels => "sheenLevels",
            OptionFacet::Coverage => "coverage",
            OptionFacet::Features => "features",
            OptionFacet::WeatherResistance => "weatherResistance",
            OptionFacet::ApplicationType => "applicationType",
            OptionFacet::SurfaceTypes => "surfaceTypes",
            OptionFacet::ClimateZones => "climateZones",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OptionFacet::Category => "Category",
            OptionFacet::Color => "Color Family",
            OptionFacet::Room => "Room",
            OptionFacet::Finish => "Finish",
            OptionFacet::Brand => "Brand",
            OptionFacet::SheenLevels => "Sheen Level",
            OptionFacet::Coverage => "Coverage",
            OptionFacet::Features => "Features",
            OptionFacet::WeatherResistance => "Weather Resistance",
            OptionFacet::ApplicationType => "Application",
            OptionFacet::SurfaceTypes => "Surface",
            OptionFacet::ClimateZones => "Climate Zone",
        }
    }

    pub fn from_param_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.param_key() == key)
    }
}

/// Inclusive price bounds in cents. `max = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    /// Build a range, swapping the bounds if `min > max`.
    pub fn new(min: u64, max: Option<u64>) -> Self {
        match max {
            Some(max) if max < min => Self { min: max, max: Some(min) },
            _ => Self { min, max },
        }
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    /// `[0, unbounded]` restricts nothing.
    pub fn is_unrestricted(&self) -> bool {
        self.min == 0 && self.max.is_none()
    }
}

/// Split, trim and lowercase raw option ids; drops empty entries.
pub fn normalize_option_ids(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// The full set of active filters for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    options: BTreeMap<OptionFacet, BTreeSet<String>>,
    price: Option<PriceRange>,
    in_stock_only: bool,
    min_rating: u8,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace the selection of `facet` with `ids`.
    pub fn with_options<I, S>(mut self, facet: OptionFacet, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear_facet(facet);
        for id in ids {
            self.select(facet, id.as_ref());
        }
        self
    }

    /// Builder: set the price range (cents).
    pub fn with_price_range(mut self, min: u64, max: Option<u64>) -> Self {
        self.set_price_range(min, max);
        self
    }

    pub fn with_in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.set_min_rating(rating);
        self
    }

    /// Add option id(s) to `facet`. Comma-separated input selects several.
    pub fn select(&mut self, facet: OptionFacet, raw: &str) {
        let mut ids = normalize_option_ids(raw).peekable();
        if ids.peek().is_none() {
            return;
        }
        self.options.entry(facet).or_default().extend(ids);
    }

    pub fn deselect(&mut self, facet: OptionFacet, raw: &str) {
        if let Some(set) = self.options.get_mut(&facet) {
            for id in normalize_option_ids(raw) {
                set.remove(&id);
            }
            if set.is_empty() {
                self.options.remove(&facet);
            }
        }
    }

    pub fn clear_facet(&mut self, facet: OptionFacet) {
        self.options.remove(&facet);
    }

    pub fn set_price_range(&mut self, min: u64, max: Option<u64>) {
        let range = PriceRange::new(min, max);
        self.price = (!range.is_unrestricted()).then_some(range);
    }

    pub fn clear_price_range(&mut self) {
        self.price = None;
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
    }

    /// Clamped to `0..=5`; `0` disables the threshold.
    pub fn set_min_rating(&mut self, rating: u8) {
        self.min_rating = rating.min(MAX_MIN_RATING);
    }

    pub fn selected(&self, facet: OptionFacet) -> Option<&BTreeSet<String>> {
        self.options.get(&facet)
    }

    pub fn is_selected(&self, facet: OptionFacet, id: &str) -> bool {
        self.options.get(&facet).is_some_and(|s| s.contains(id))
    }

    /// Option facets with at least one selected option, in facet order.
    pub fn active_option_facets(&self) -> impl Iterator<Item = (OptionFacet, &BTreeSet<String>)> {
        self.options.iter().map(|(f, s)| (*f, s))
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price
    }

    pub fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    pub fn min_rating(&self) -> u8 {
        self.min_rating
    }

    /// One unit per dimension holding a non-default value.
    pub fn active_filter_count(&self) -> usize {
        self.options.len() + self.scalar_filter_count()
    }

    /// Like [`FilterState::active_filter_count`], counting only the option
    /// facets in `offered`; selections for other facets filter nothing.
    pub fn active_filter_count_in(&self, offered: &[OptionFacet]) -> usize {
        let options = self.options.keys().filter(|f| offered.contains(*f)).count();
        options + self.scalar_filter_count()
    }

    fn scalar_filter_count(&self) -> usize {
        usize::from(self.price.is_some())
            + usize::from(self.in_stock_only)
            + usize::from(self.min_rating > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Copy of this state with `facet` cleared.
    pub fn without(&self, facet: OptionFacet) -> Self {
        let mut next = self.clone();
        next.clear_facet(facet);
        next
    }
}
