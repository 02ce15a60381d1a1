//! Listing evaluation: scope → search → filter → sort → count → paginate.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use paintshop_catalog::{CatalogSnapshot, Product};

use crate::config::EngineConfig;
use crate::counts::{FacetCountMode, FacetCounts, exclude_self_counts, full_catalog_counts};
use crate::facets::FacetDefinition;
use crate::filter::FilterState;
use crate::paginate::paginate;
use crate::params::DiscoveryQuery;
use crate::predicate::compose;
use crate::search::{matches_normalized, normalize_query};
use crate::sort::{SortKey, sort_indices};
use crate::view::ViewKind;

/// What a listing page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResult {
    pub items: Vec<Product>,
    pub page: usize,
    pub page_size: usize,
    /// Matching products before pagination.
    pub total_count: usize,
    /// `0` when nothing matches; see [`DiscoveryResult::display_total_pages`].
    pub total_pages: usize,
    pub facets: Vec<FacetDefinition>,
    pub facet_counts: FacetCounts,
    pub active_filter_count: usize,
}

impl DiscoveryResult {
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }
}

/// Identity of one filtered + sorted ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    revision: u64,
    filters: FilterState,
    query: String,
    sort: SortKey,
}

/// Discovery engine for one view.
///
/// Evaluation is a pure function of (catalog, request); the memo only avoids
/// recomputing the filtered + sorted order of a catalog snapshot.
#[derive(Debug)]
pub struct DiscoveryEngine {
    view: ViewKind,
    config: EngineConfig,
    memo: RwLock<HashMap<MemoKey, Arc<[usize]>>>,
}

impl DiscoveryEngine {
    pub fn new(view: ViewKind, config: EngineConfig) -> Self {
        Self {
            view,
            config,
            memo: RwLock::new(HashMap::new()),
        }
    }

    pub fn view(&self) -> &ViewKind {
        &self.view
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `request` against a catalog snapshot (memoized by revision).
    #[tracing::instrument(
        skip_all,
        fields(view = %self.view, revision = catalog.revision(), page = request.page)
    )]
    pub fn evaluate(&self, catalog: &CatalogSnapshot, request: &DiscoveryQuery) -> DiscoveryResult {
        self.run(catalog.products(), request, Some(catalog.revision()))
    }

    /// Evaluate against a bare product slice. Never memoized, since a slice
    /// carries no catalog identity.
    pub fn evaluate_products(
        &self,
        products: &[Product],
        request: &DiscoveryQuery,
    ) -> DiscoveryResult {
        self.run(products, request, None)
    }

    /// Number of memoized orderings currently held.
    pub fn memo_len(&self) -> usize {
        self.memo.read().map(|m| m.len()).unwrap_or(0)
    }

    fn run(
        &self,
        products: &[Product],
        request: &DiscoveryQuery,
        revision: Option<u64>,
    ) -> DiscoveryResult {
        let scoped: Vec<usize> = (0..products.len())
            .filter(|&i| self.view.in_scope(&products[i]))
            .collect();
        let scoped_refs: Vec<&Product> = scoped.iter().map(|&i| &products[i]).collect();
        let facets = self.view.resolve_facets(&scoped_refs);

        let query = normalize_query(&request.query);
        let searched: Vec<usize> = scoped
            .iter()
            .copied()
            .filter(|&i| matches_normalized(&products[i], &query))
            .collect();

        let key = revision.map(|revision| MemoKey {
            revision,
            filters: request.filters.clone(),
            query: query.clone(),
            sort: request.sort,
        });
        let ordered = match key.as_ref().and_then(|k| self.memo_get(k)) {
            Some(hit) => hit,
            None => {
                let ordered = order(products, &searched, &request.filters, &facets, request.sort);
                if let Some(key) = key {
                    self.memo_put(key, Arc::clone(&ordered));
                }
                ordered
            }
        };

        let facet_counts = match self.config.facet_count_mode {
            FacetCountMode::ExcludeSelf => {
                let searched_refs: Vec<&Product> = searched.iter().map(|&i| &products[i]).collect();
                exclude_self_counts(&searched_refs, &request.filters, &facets)
            }
            FacetCountMode::FullCatalog => full_catalog_counts(&scoped_refs, &facets),
        };

        let page = paginate(&ordered[..], request.page, self.config.page_size)
            .map(|i| products[i].clone());

        tracing::debug!(
            scoped = scoped.len(),
            searched = searched.len(),
            matched = page.total_count,
            returned = page.items.len(),
            "listing evaluated"
        );

        DiscoveryResult {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total_count: page.total_count,
            total_pages: page.total_pages,
            facets,
            facet_counts,
            active_filter_count: request.filters.active_filter_count_in(self.view.facets()),
        }
    }

    fn memo_get(&self, key: &MemoKey) -> Option<Arc<[usize]>> {
        if self.config.memo_capacity == 0 {
            return None;
        }
        self.memo.read().ok()?.get(key).cloned()
    }

    fn memo_put(&self, key: MemoKey, ordered: Arc<[usize]>) {
        if self.config.memo_capacity == 0 {
            return;
        }
        let Ok(mut memo) = self.memo.write() else {
            tracing::warn!("memo lock poisoned; result not cached");
            return;
        };
        if memo.len() >= self.config.memo_capacity {
            memo.clear();
        }
        memo.insert(key, ordered);
    }
}

/// Indices of `searched` products passing the filters, in sorted order.
fn order(
    products: &[Product],
    searched: &[usize],
    filters: &FilterState,
    facets: &[FacetDefinition],
    sort: SortKey,
) -> Arc<[usize]> {
    let predicate = compose(filters, facets);
    let mut matched: Vec<usize> = searched
        .iter()
        .copied()
        .filter(|&i| predicate.matches(&products[i]))
        .collect();
    sort_indices(products, &mut matched, sort);
    matched.into()
}
