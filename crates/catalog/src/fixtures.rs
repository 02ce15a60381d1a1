//! Builders for catalog records in tests and benchmarks.
//!
//! Enabled with the `test-utils` feature.

use chrono::{DateTime, Utc};

use paintshop_core::{ColorId, FinishId, ProductId};

use crate::product::{ColorOption, Finish, Product};

/// Fluent builder producing a valid [`Product`] with neutral defaults.
///
/// Unless colors or finishes are added explicitly, the product gets one
/// `"Pure White"` color and one `"Eggshell"` finish so it passes validation.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
    custom_colors: bool,
    custom_finishes: bool,
}

impl ProductBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            product: Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                brand: "Generic".to_string(),
                description: String::new(),
                category: "interior".to_string(),
                base_price: 2_500,
                rating: 4.0,
                review_count: 0,
                in_stock: true,
                coverage: String::new(),
                dry_time: "1 hour".to_string(),
                colors: vec![color(id, 0, "Pure White")],
                finishes: vec![finish(id, 0, "Eggshell", "10-25%", 0)],
                features: Vec::new(),
                surface_types: Vec::new(),
                climate_zones: Vec::new(),
                application_types: Vec::new(),
                durability_rating: None,
                weather_resistance: None,
                created_at: None,
            },
            custom_colors: false,
            custom_finishes: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.product.name = name.to_string();
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.product.brand = brand.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.product.description = description.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.product.category = category.to_string();
        self
    }

    /// Base price in cents.
    pub fn price(mut self, cents: u64) -> Self {
        self.product.base_price = cents;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.product.rating = rating;
        self
    }

    pub fn reviews(mut self, count: u32) -> Self {
        self.product.review_count = count;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.product.in_stock = in_stock;
        self
    }

    pub fn coverage(mut self, coverage: &str) -> Self {
        self.product.coverage = coverage.to_string();
        self
    }

    /// Add a color; the first call replaces the default color.
    pub fn color(mut self, name: &str) -> Self {
        if !self.custom_colors {
            self.product.colors.clear();
            self.custom_colors = true;
        }
        let idx = self.product.colors.len();
        let id = self.product.id.to_string();
        self.product.colors.push(color(&id, idx, name));
        self
    }

    /// Add a finish; the first call replaces the default finish.
    pub fn finish(mut self, name: &str, sheen: &str, price_delta: i64) -> Self {
        if !self.custom_finishes {
            self.product.finishes.clear();
            self.custom_finishes = true;
        }
        let idx = self.product.finishes.len();
        let id = self.product.id.to_string();
        self.product
            .finishes
            .push(finish(&id, idx, name, sheen, price_delta));
        self
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.product.features.push(feature.to_string());
        self
    }

    pub fn surface(mut self, surface: &str) -> Self {
        self.product.surface_types.push(surface.to_string());
        self
    }

    pub fn climate_zone(mut self, zone: &str) -> Self {
        self.product.climate_zones.push(zone.to_string());
        self
    }

    pub fn application(mut self, application: &str) -> Self {
        self.product.application_types.push(application.to_string());
        self
    }

    pub fn durability(mut self, rating: u8) -> Self {
        self.product.durability_rating = Some(rating);
        self
    }

    pub fn weather_resistance(mut self, level: &str) -> Self {
        self.product.weather_resistance = Some(level.to_string());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.product.created_at = Some(at);
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

fn color(product_id: &str, idx: usize, name: &str) -> ColorOption {
    ColorOption {
        id: ColorId::new(format!("{product_id}-c{idx}")),
        name: name.to_string(),
        hex: "#FFFFFF".to_string(),
        image: None,
        in_stock: true,
    }
}

fn finish(product_id: &str, idx: usize, name: &str, sheen: &str, price_delta: i64) -> Finish {
    Finish {
        id: FinishId::new(format!("{product_id}-f{idx}")),
        name: name.to_string(),
        sheen: sheen.to_string(),
        price_delta,
        coverage: String::new(),
    }
}

/// A small mixed interior/exterior catalog used across tests.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        ProductBuilder::new("int-001")
            .name("Serene Living Interior")
            .brand("Harbor Coatings")
            .description("Washable paint for the living room and hallways")
            .category("interior")
            .price(4_299)
            .rating(4.6)
            .reviews(210)
            .coverage("350-400 sq ft per gallon")
            .color("Sage Whisper")
            .color("Ivory Lace")
            .finish("Eggshell", "10-25%", 0)
            .finish("Satin", "25-35%", 300)
            .feature("Low VOC")
            .feature("Scrubbable")
            .build(),
        ProductBuilder::new("int-002")
            .name("Kitchen & Bath Pro")
            .brand("Summit Paints")
            .description("Moisture-resistant formula for kitchen and bathroom walls")
            .category("interior")
            .price(5_499)
            .rating(4.2)
            .reviews(95)
            .coverage("400-450 sq ft per gallon")
            .color("Navy Harbor")
            .finish("Semi-Gloss", "35-70%", 0)
            .feature("Mildew Resistant")
            .build(),
        ProductBuilder::new("int-003")
            .name("Budget Matte")
            .brand("harbor coatings")
            .description("Flat finish for ceilings and bedroom walls")
            .category("interior")
            .price(2_199)
            .rating(3.8)
            .reviews(40)
            .in_stock(false)
            .coverage("250 sq ft per gallon")
            .color("Charcoal Slate")
            .finish("Flat", "0-5%", 0)
            .build(),
        ProductBuilder::new("ext-001")
            .name("WeatherGuard Exterior")
            .brand("Summit Paints")
            .description("All-season protection for siding and trim")
            .category("exterior")
            .price(6_999)
            .rating(4.8)
            .reviews(320)
            .coverage("300-350 sq ft per gallon")
            .color("Forest Green")
            .color("Barn Red")
            .finish("Satin", "25-35%", 0)
            .feature("UV Resistant")
            .surface("Wood")
            .surface("Vinyl")
            .climate_zone("Coastal")
            .application("Brush")
            .application("Spray")
            .durability(9)
            .weather_resistance("Excellent")
            .build(),
        ProductBuilder::new("ext-002")
            .name("Masonry Shield")
            .brand("Stonecraft")
            .description("Breathable coating for brick and stucco")
            .category("exterior")
            .price(5_999)
            .rating(4.1)
            .reviews(60)
            .coverage("150-200 sq ft per gallon")
            .color("Sand Dune")
            .finish("Flat", "0-5%", 0)
            .surface("Masonry")
            .climate_zone("Arid")
            .application("Roller")
            .durability(7)
            .weather_resistance("Good")
            .build(),
    ]
}
