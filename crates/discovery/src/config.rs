//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::counts::FacetCountMode;

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_MEMO_CAPACITY: usize = 64;

pub const PAGE_SIZE_ENV: &str = "PAINTSHOP_PAGE_SIZE";
pub const FACET_COUNTS_ENV: &str = "PAINTSHOP_FACET_COUNTS";
pub const MEMO_CAPACITY_ENV: &str = "PAINTSHOP_MEMO_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Products per page (at least 1).
    pub page_size: usize,
    pub facet_count_mode: FacetCountMode,
    /// Maximum memoized result orderings; 0 disables memoization.
    pub memo_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            facet_count_mode: FacetCountMode::default(),
            memo_capacity: DEFAULT_MEMO_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Read overrides from `PAINTSHOP_*` environment variables.
    ///
    /// Invalid values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`EngineConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_PAGE_SIZE,
                    "{PAGE_SIZE_ENV} must be a positive integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup(FACET_COUNTS_ENV) {
            match raw.parse::<FacetCountMode>() {
                Ok(mode) => config.facet_count_mode = mode,
                Err(err) => {
                    tracing::warn!(error = %err, "{FACET_COUNTS_ENV} ignored; using exclude-self")
                }
            }
        }

        if let Some(raw) = lookup(MEMO_CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.memo_capacity = capacity,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_MEMO_CAPACITY,
                    "{MEMO_CAPACITY_ENV} must be a non-negative integer; using default"
                ),
            }
        }

        config
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_facet_count_mode(mut self, mode: FacetCountMode) -> Self {
        self.facet_count_mode = mode;
        self
    }

    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }
}
