use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use paintshop_core::{ColorId, DomainError, DomainResult, Entity, FinishId, ProductId};

/// Highest value a product rating may take (five-star scale).
pub const MAX_RATING: f64 = 5.0;

/// A purchasable color of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    pub id: ColorId,
    pub name: String,
    pub hex: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

/// A finish (sheen) variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finish {
    pub id: FinishId,
    pub name: String,
    /// Free-text sheen description, e.g. `"25-35% sheen"` or `"Semi-Gloss"`.
    pub sheen: String,
    /// Price difference to the base price in cents (may be negative).
    #[serde(default)]
    pub price_delta: i64,
    #[serde(default)]
    pub coverage: String,
}

/// Catalog product (read model).
///
/// Prices are in the smallest currency unit (cents). View-specific attributes
/// (surfaces, climate zones, durability, weather resistance, application
/// types) are optional and default to empty when a catalog omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub base_price: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Free-text coverage, e.g. `"300-350 sq ft per gallon"`.
    #[serde(default)]
    pub coverage: String,
    #[serde(default)]
    pub dry_time: String,
    pub colors: Vec<ColorOption>,
    pub finishes: Vec<Finish>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub surface_types: Vec<String>,
    #[serde(default)]
    pub climate_zones: Vec<String>,
    #[serde(default)]
    pub application_types: Vec<String>,
    #[serde(default)]
    pub durability_rating: Option<u8>,
    #[serde(default)]
    pub weather_resistance: Option<String>,
    /// When the product entered the catalog. Drives the "newest" ordering.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Check the record against catalog invariants.
    ///
    /// Prices and review counts are unsigned, so only the remaining
    /// constraints need checking here.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::invalid_id("product id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(DomainError::validation(format!(
                "rating must be within 0-5 (got {})",
                self.rating
            )));
        }
        if self.colors.is_empty() {
            return Err(DomainError::validation("product must offer at least one color"));
        }
        if self.finishes.is_empty() {
            return Err(DomainError::validation("product must offer at least one finish"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ProductBuilder;

    #[test]
    fn valid_product_passes_validation() {
        let product = ProductBuilder::new("prod-001").build();
        assert!(product.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let product = ProductBuilder::new("prod-001").name("  ").build();
        match product.validate().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("name") => {}
            other => panic!("Expected Validation error for name, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_rating_out_of_range() {
        let product = ProductBuilder::new("prod-001").rating(5.5).build();
        assert!(matches!(product.validate(), Err(DomainError::Validation(_))));

        let product = ProductBuilder::new("prod-001").rating(f64::NAN).build();
        assert!(matches!(product.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_missing_colors_and_finishes() {
        let mut product = ProductBuilder::new("prod-001").build();
        product.colors.clear();
        assert!(product.validate().is_err());

        let mut product = ProductBuilder::new("prod-001").build();
        product.finishes.clear();
        assert!(product.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_id() {
        let product = ProductBuilder::new(" ").build();
        assert!(matches!(product.validate(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn json_uses_camel_case_and_defaults_view_attributes() {
        let json = r##"{
            "id": "prod-001",
            "name": "Everyday Interior",
            "brand": "Acme",
            "category": "interior",
            "basePrice": 3499,
            "rating": 4.2,
            "reviewCount": 18,
            "coverage": "350-400 sq ft per gallon",
            "colors": [{"id": "c1", "name": "Sage Whisper", "hex": "#9CAF88"}],
            "finishes": [{"id": "f1", "name": "Eggshell", "sheen": "10-25%"}]
        }"##;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.base_price, 3_499);
        assert_eq!(product.review_count, 18);
        assert!(product.in_stock);
        assert!(product.colors[0].in_stock);
        assert!(product.surface_types.is_empty());
        assert_eq!(product.durability_rating, None);
        assert_eq!(product.created_at, None);
    }
}
