//! Free-text product search: plain case-insensitive substring containment.

use paintshop_catalog::Product;

/// Trim and lowercase a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `product` matches the raw `query`. An empty query matches everything.
pub fn matches(product: &Product, query: &str) -> bool {
    matches_normalized(product, &normalize_query(query))
}

/// Like [`matches`], for a query already passed through [`normalize_query`].
///
/// Searched fields: name, description, brand, color names, features.
pub fn matches_normalized(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(query);

    contains(&product.name)
        || contains(&product.description)
        || contains(&product.brand)
        || product.colors.iter().any(|c| contains(&c.name))
        || product.features.iter().any(|f| contains(f))
}
