//! URL query-parameter mapping for deep links.
//!
//! A listing request serializes to a flat `application/x-www-form-urlencoded`
//! string such as `q=sage&color=blues,greens&minPrice=25&sort=price-low&page=2`.
//! Default values are omitted. Parsing never fails: unknown keys and
//! malformed values are skipped.

use url::form_urlencoded;

use crate::filter::{FilterState, OptionFacet};
use crate::sort::SortKey;

pub const QUERY_KEY: &str = "q";
pub const SORT_KEY: &str = "sort";
pub const PAGE_KEY: &str = "page";
pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";
pub const IN_STOCK_KEY: &str = "inStock";
pub const MIN_RATING_KEY: &str = "minRating";

/// Everything a listing page needs to ask of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveryQuery {
    pub filters: FilterState,
    /// Raw free-text query; normalized by the engine.
    pub query: String,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            query: String::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl DiscoveryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Flat key/value pairs in a fixed key order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if !self.query.is_empty() {
            pairs.push((QUERY_KEY, self.query.clone()));
        }
        for (facet, selected) in self.filters.active_option_facets() {
            let joined = selected.iter().map(String::as_str).collect::<Vec<_>>().join(",");
            pairs.push((facet.param_key(), joined));
        }
        if let Some(range) = self.filters.price_range() {
            if range.min > 0 {
                pairs.push((MIN_PRICE_KEY, format_price(range.min)));
            }
            if let Some(max) = range.max {
                pairs.push((MAX_PRICE_KEY, format_price(max)));
            }
        }
        if self.filters.in_stock_only() {
            pairs.push((IN_STOCK_KEY, "true".to_string()));
        }
        if self.filters.min_rating() > 0 {
            pairs.push((MIN_RATING_KEY, self.filters.min_rating().to_string()));
        }
        if self.sort != SortKey::default() {
            pairs.push((SORT_KEY, self.sort.as_str().to_string()));
        }
        if self.page != 1 {
            pairs.push((PAGE_KEY, self.page.to_string()));
        }

        pairs
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }

    /// Build a request from decoded pairs. Repeated option keys accumulate;
    /// repeated scalar keys keep the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();
        let mut min_price = None;
        let mut max_price = None;

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());

            if let Some(facet) = OptionFacet::from_param_key(key) {
                request.filters.select(facet, value);
                continue;
            }

            match key {
                QUERY_KEY => request.query = value.to_string(),
                SORT_KEY => request.sort = SortKey::parse_or_default(value),
                PAGE_KEY => match value.trim().parse() {
                    Ok(page) => request.page = page,
                    Err(_) => tracing::debug!(value, "ignoring malformed page parameter"),
                },
                MIN_PRICE_KEY => min_price = parse_lenient(key, value, parse_price),
                MAX_PRICE_KEY => max_price = parse_lenient(key, value, parse_price),
                IN_STOCK_KEY => {
                    let flag = value.trim().to_lowercase();
                    request.filters.set_in_stock_only(flag == "true" || flag == "1");
                }
                MIN_RATING_KEY => {
                    let rating = parse_lenient(key, value, |v| v.trim().parse::<u8>().ok());
                    if let Some(rating) = rating {
                        request.filters.set_min_rating(rating);
                    }
                }
                _ => tracing::debug!(key, "ignoring unknown query parameter"),
            }
        }

        if min_price.is_some() || max_price.is_some() {
            request.filters.set_price_range(min_price.unwrap_or(0), max_price);
        }
        request
    }

    /// Parse a query string, with or without a leading `?`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }
}

fn parse_lenient<T>(key: &str, value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value);
    if parsed.is_none() {
        tracing::debug!(key, value, "ignoring malformed query parameter");
    }
    parsed
}

/// Cents as a decimal currency amount: `2500` → `"25"`, `2550` → `"25.50"`.
pub fn format_price(cents: u64) -> String {
    match cents % 100 {
        0 => (cents / 100).to_string(),
        frac => format!("{}.{:02}", cents / 100, frac),
    }
}

/// Decimal currency amount (up to two fraction digits) to cents.
pub fn parse_price(text: &str) -> Option<u64> {
    let text = text.trim();
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: u64 = whole.parse().ok()?;
    let frac_cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse::<u64>().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac_cents)
}
