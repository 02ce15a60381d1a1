//! Immutable catalog snapshots.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use paintshop_core::{DomainError, DomainResult, Entity, ProductId};

use crate::error::CatalogError;
use crate::product::Product;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// A validated, immutable list of products.
///
/// Every snapshot gets a process-unique `revision`, which downstream caches
/// use as the catalog's identity. Cloning is cheap (shared storage).
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    revision: u64,
    products: Arc<[Product]>,
}

impl CatalogSnapshot {
    /// Validate every product and reject duplicate ids.
    pub fn try_new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product
                .validate()
                .map_err(|source| CatalogError::InvalidProduct {
                    id: product.id().clone(),
                    source,
                })?;
            if !seen.insert(product.id().clone()) {
                return Err(CatalogError::DuplicateId(product.id().clone()));
            }
        }

        Ok(Self {
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
            products: products.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
            products: Arc::from(Vec::new()),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Product detail lookup.
    pub fn get(&self, id: &ProductId) -> DomainResult<&Product> {
        self.find(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ProductBuilder, sample_catalog};

    #[test]
    fn snapshots_get_distinct_revisions() {
        let a = CatalogSnapshot::try_new(sample_catalog()).unwrap();
        let b = CatalogSnapshot::try_new(sample_catalog()).unwrap();
        assert_ne!(a.revision(), b.revision());
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn clones_share_revision() {
        let a = CatalogSnapshot::try_new(sample_catalog()).unwrap();
        let b = a.clone();
        assert_eq!(a.revision(), b.revision());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let products = vec![
            ProductBuilder::new("dup").build(),
            ProductBuilder::new("dup").build(),
        ];
        match CatalogSnapshot::try_new(products).unwrap_err() {
            CatalogError::DuplicateId(id) => assert_eq!(id, ProductId::new("dup")),
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_products() {
        let products = vec![ProductBuilder::new("bad").rating(7.0).build()];
        assert!(matches!(
            CatalogSnapshot::try_new(products),
            Err(CatalogError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn looks_up_products_by_id() {
        let snapshot = CatalogSnapshot::try_new(sample_catalog()).unwrap();
        assert_eq!(snapshot.get(&ProductId::new("ext-002")).unwrap().brand, "Stonecraft");
        assert_eq!(
            snapshot.get(&ProductId::new("missing")).unwrap_err(),
            DomainError::NotFound("product missing".to_string())
        );
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let snapshot = CatalogSnapshot::empty();
        assert!(snapshot.is_empty());
        assert!(snapshot.products().is_empty());
    }
}
