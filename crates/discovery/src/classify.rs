//! Attribute classifiers: free-text product attributes to canonical facet values.
//!
//! Each classifier is an ordered rule table of `(tag, needles)` pairs. Rules
//! are tried top to bottom and the first rule with a needle contained in the
//! lowercased input wins, so precedence is exactly the table order. Every
//! classifier is total and falls back to an `Other` tag.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static FIRST_INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex is valid"));

/// Extract the first run of ASCII digits as an integer.
///
/// Returns `0` when the text has no digits or the number does not fit in `u32`.
pub fn first_integer(text: &str) -> u32 {
    FIRST_INTEGER_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn first_match<T: Copy>(text: &str, rules: &[(T, &[&str])], fallback: T) -> T {
    let lower = text.to_lowercase();
    rules
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
        .map(|(tag, _)| *tag)
        .unwrap_or(fallback)
}

// -------------------------
// Color family
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Whites,
    Grays,
    Beiges,
    Blues,
    Greens,
    Browns,
    Reds,
    Yellows,
    Other,
}

pub const COLOR_FAMILY_RULES: &[(ColorFamily, &[&str])] = &[
    (ColorFamily::Whites, &["white", "cream", "ivory"]),
    (ColorFamily::Grays, &["gray", "grey", "charcoal", "slate"]),
    (ColorFamily::Beiges, &["beige", "tan", "sand", "taupe"]),
    (ColorFamily::Blues, &["blue", "navy", "azure", "teal"]),
    (ColorFamily::Greens, &["green", "sage", "mint", "forest"]),
    (ColorFamily::Browns, &["brown", "espresso", "chocolate", "mahogany"]),
    (ColorFamily::Reds, &["red", "burgundy", "crimson", "cherry"]),
    (ColorFamily::Yellows, &["yellow", "gold", "mustard", "amber"]),
];

impl ColorFamily {
    pub const ALL: [ColorFamily; 9] = [
        ColorFamily::Whites,
        ColorFamily::Grays,
        ColorFamily::Beiges,
        ColorFamily::Blues,
        ColorFamily::Greens,
        ColorFamily::Browns,
        ColorFamily::Reds,
        ColorFamily::Yellows,
        ColorFamily::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFamily::Whites => "whites",
            ColorFamily::Grays => "grays",
            ColorFamily::Beiges => "beiges",
            ColorFamily::Blues => "blues",
            ColorFamily::Greens => "greens",
            ColorFamily::Browns => "browns",
            ColorFamily::Reds => "reds",
            ColorFamily::Yellows => "yellows",
            ColorFamily::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorFamily::Whites => "Whites",
            ColorFamily::Grays => "Grays",
            ColorFamily::Beiges => "Beiges",
            ColorFamily::Blues => "Blues",
            ColorFamily::Greens => "Greens",
            ColorFamily::Browns => "Browns",
            ColorFamily::Reds => "Reds",
            ColorFamily::Yellows => "Yellows",
            ColorFamily::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == slug)
    }
}

/// Classify a color name into its family. Note that `"tan"` also matches
/// inside longer words; that is accepted since the table is checked in order.
pub fn color_family(name: &str) -> ColorFamily {
    first_match(name, COLOR_FAMILY_RULES, ColorFamily::Other)
}

// -------------------------
// Sheen bucket
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheenBucket {
    Flat,
    Matte,
    Eggshell,
    Satin,
    SemiGloss,
    Gloss,
    Other,
}

/// Range token first, then the bucket name. `semi-gloss` precedes `gloss`.
pub const SHEEN_RULES: &[(SheenBucket, &[&str])] = &[
    (SheenBucket::Flat, &["0-5%", "flat"]),
    (SheenBucket::Matte, &["5-10%", "matte"]),
    (SheenBucket::Eggshell, &["10-25%", "eggshell"]),
    (SheenBucket::Satin, &["25-35%", "satin"]),
    (SheenBucket::SemiGloss, &["35-70%", "semi-gloss"]),
    (SheenBucket::Gloss, &["70%+", "gloss"]),
];

impl SheenBucket {
    pub const ALL: [SheenBucket; 7] = [
        SheenBucket::Flat,
        SheenBucket::Matte,
        SheenBucket::Eggshell,
        SheenBucket::Satin,
        SheenBucket::SemiGloss,
        SheenBucket::Gloss,
        SheenBucket::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SheenBucket::Flat => "flat",
            SheenBucket::Matte => "matte",
            SheenBucket::Eggshell => "eggshell",
            SheenBucket::Satin => "satin",
            SheenBucket::SemiGloss => "semi-gloss",
            SheenBucket::Gloss => "gloss",
            SheenBucket::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SheenBucket::Flat => "Flat (0-5%)",
            SheenBucket::Matte => "Matte (5-10%)",
            SheenBucket::Eggshell => "Eggshell (10-25%)",
            SheenBucket::Satin => "Satin (25-35%)",
            SheenBucket::SemiGloss => "Semi-Gloss (35-70%)",
            SheenBucket::Gloss => "Gloss (70%+)",
            SheenBucket::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == slug)
    }
}

pub fn sheen_bucket(text: &str) -> SheenBucket {
    first_match(text, SHEEN_RULES, SheenBucket::Other)
}

// -------------------------
// Coverage tier
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageTier {
    Standard,
    Premium,
    Other,
}

pub const COVERAGE_RULES: &[(CoverageTier, &[&str])] = &[
    (CoverageTier::Standard, &["300-350", "350-400"]),
    (CoverageTier::Premium, &["400-450", "450+"]),
];

/// Minimum square feet per gallon for the numeric fallback.
pub const PREMIUM_MIN_SQ_FT: u32 = 400;
pub const STANDARD_MIN_SQ_FT: u32 = 300;

impl CoverageTier {
    pub const ALL: [CoverageTier; 3] = [
        CoverageTier::Standard,
        CoverageTier::Premium,
        CoverageTier::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageTier::Standard => "standard",
            CoverageTier::Premium => "premium",
            CoverageTier::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CoverageTier::Standard => "Standard (300-400 sq ft)",
            CoverageTier::Premium => "Premium (400+ sq ft)",
            CoverageTier::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == slug)
    }
}

/// Literal range tokens first, then the first integer against thresholds.
pub fn coverage_tier(text: &str) -> CoverageTier {
    match first_match(text, COVERAGE_RULES, CoverageTier::Other) {
        CoverageTier::Other => match first_integer(text) {
            n if n >= PREMIUM_MIN_SQ_FT => CoverageTier::Premium,
            n if n >= STANDARD_MIN_SQ_FT => CoverageTier::Standard,
            _ => CoverageTier::Other,
        },
        tier => tier,
    }
}
