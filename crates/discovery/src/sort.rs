//! Sort comparator registry.
//!
//! All orderings are applied with a stable sort, so products with equal keys
//! keep their catalog order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use paintshop_catalog::Product;

use crate::classify::first_integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    #[default]
    Rating,
    Popular,
    Name,
    Coverage,
    Durability,
    Newest,
}

pub type Comparator = fn(&Product, &Product) -> Ordering;

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Popular,
        SortKey::Name,
        SortKey::Coverage,
        SortKey::Durability,
        SortKey::Newest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Popular => "popular",
            SortKey::Name => "name",
            SortKey::Coverage => "coverage",
            SortKey::Durability => "durability",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Popular => "Most Popular",
            SortKey::Name => "Name",
            SortKey::Coverage => "Best Coverage",
            SortKey::Durability => "Most Durable",
            SortKey::Newest => "Newest",
        }
    }

    /// Strict lookup of a sort token.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == token)
    }

    /// Lenient lookup: unknown tokens fall back to [`SortKey::Rating`].
    pub fn parse_or_default(token: &str) -> Self {
        Self::from_token(token).unwrap_or_else(|| {
            tracing::debug!(token, "unknown sort key; using default");
            Self::default()
        })
    }

    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::PriceLow => by_price_asc,
            SortKey::PriceHigh => by_price_desc,
            SortKey::Rating => by_rating_desc,
            SortKey::Popular => by_reviews_desc,
            SortKey::Name => by_name_asc,
            SortKey::Coverage => by_coverage_desc,
            SortKey::Durability => by_durability_desc,
            SortKey::Newest => by_created_desc,
        }
    }
}

fn by_price_asc(a: &Product, b: &Product) -> Ordering {
    a.base_price.cmp(&b.base_price)
}

fn by_price_desc(a: &Product, b: &Product) -> Ordering {
    b.base_price.cmp(&a.base_price)
}

fn by_rating_desc(a: &Product, b: &Product) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn by_reviews_desc(a: &Product, b: &Product) -> Ordering {
    b.review_count.cmp(&a.review_count)
}

fn by_name_asc(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_coverage_desc(a: &Product, b: &Product) -> Ordering {
    first_integer(&b.coverage).cmp(&first_integer(&a.coverage))
}

fn by_durability_desc(a: &Product, b: &Product) -> Ordering {
    b.durability_rating
        .unwrap_or(0)
        .cmp(&a.durability_rating.unwrap_or(0))
}

// `None < Some`, so undated products sort after dated ones.
fn by_created_desc(a: &Product, b: &Product) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort of positions into `products` by `key`.
pub fn sort_indices(products: &[Product], indices: &mut [usize], key: SortKey) {
    let cmp = key.comparator();
    indices.sort_by(|&a, &b| cmp(&products[a], &products[b]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use paintshop_catalog::fixtures::ProductBuilder;

    fn order(mut products: Vec<Product>, key: SortKey) -> Vec<String> {
        let cmp = key.comparator();
        products.sort_by(cmp);
        products.into_iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn price_orders() {
        let products = vec![
            ProductBuilder::new("a").price(5_000).build(),
            ProductBuilder::new("b").price(2_000).build(),
            ProductBuilder::new("c").price(8_000).build(),
        ];
        assert_eq!(order(products.clone(), SortKey::PriceLow), vec!["b", "a", "c"]);
        assert_eq!(order(products, SortKey::PriceHigh), vec!["c", "a", "b"]);
    }

    #[test]
    fn rating_and_popular_are_descending() {
        let products = vec![
            ProductBuilder::new("a").rating(4.1).reviews(10).build(),
            ProductBuilder::new("b").rating(4.9).reviews(5).build(),
            ProductBuilder::new("c").rating(3.0).reviews(50).build(),
        ];
        assert_eq!(order(products.clone(), SortKey::Rating), vec!["b", "a", "c"]);
        assert_eq!(order(products, SortKey::Popular), vec!["c", "a", "b"]);
    }

    #[test]
    fn name_is_case_insensitive() {
        let products = vec![
            ProductBuilder::new("a").name("beta").build(),
            ProductBuilder::new("b").name("Alpha").build(),
            ProductBuilder::new("c").name("Gamma").build(),
        ];
        assert_eq!(order(products, SortKey::Name), vec!["b", "a", "c"]);
    }

    #[test]
    fn coverage_uses_first_integer_with_zero_fallback() {
        let products = vec![
            ProductBuilder::new("a").coverage("150-200 sq ft per gallon").build(),
            ProductBuilder::new("b").coverage("unknown").build(),
            ProductBuilder::new("c").coverage("400-450 sq ft per gallon").build(),
        ];
        assert_eq!(order(products, SortKey::Coverage), vec!["c", "a", "b"]);
    }

    #[test]
    fn durability_treats_missing_as_zero() {
        let products = vec![
            ProductBuilder::new("a").build(),
            ProductBuilder::new("b").durability(7).build(),
            ProductBuilder::new("c").durability(9).build(),
        ];
        assert_eq!(order(products, SortKey::Durability), vec!["c", "b", "a"]);
    }

    #[test]
    fn newest_uses_created_at_and_puts_undated_last() {
        let products = vec![
            ProductBuilder::new("undated").build(),
            ProductBuilder::new("old")
                .created_at(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
                .build(),
            ProductBuilder::new("new")
                .created_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
                .build(),
        ];
        assert_eq!(order(products, SortKey::Newest), vec!["new", "old", "undated"]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let products = vec![
            ProductBuilder::new("first").name("Same").price(1_000).rating(4.0).build(),
            ProductBuilder::new("second").name("Same").price(1_000).rating(4.0).build(),
            ProductBuilder::new("third").name("Same").price(1_000).rating(4.0).build(),
        ];
        for key in SortKey::ALL {
            assert_eq!(
                order(products.clone(), key),
                vec!["first", "second", "third"],
                "sort key {key} is not stable"
            );
        }
    }

    #[test]
    fn unknown_tokens_fall_back_to_rating() {
        assert_eq!(SortKey::parse_or_default("cheapest"), SortKey::Rating);
        assert_eq!(SortKey::parse_or_default(""), SortKey::Rating);
        assert_eq!(SortKey::parse_or_default("Price-Low"), SortKey::PriceLow);
        assert_eq!(SortKey::from_token("cheapest"), None);
    }

    #[test]
    fn tokens_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_token(key.as_str()), Some(key));
        }
    }
}
