//! Catalog sources: where the discovery engine gets its products from.
//!
//! Latency, retries and transport failures are the source's concern; the
//! engine only ever sees a validated [`CatalogSnapshot`].

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::product::Product;
use crate::snapshot::CatalogSnapshot;

/// Asynchronous provider of catalog snapshots.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<CatalogSnapshot, CatalogError>;
}

/// In-memory catalog, validated once on construction.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        Ok(Self {
            snapshot: CatalogSnapshot::try_new(products)?,
        })
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(self.snapshot.clone())
    }
}

/// Catalog stored as a JSON array of products on disk.
///
/// Every `load()` re-reads the file and yields a snapshot with a new revision.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        let products: Vec<Product> = serde_json::from_slice(&raw)?;
        let snapshot = CatalogSnapshot::try_new(products)?;

        tracing::info!(
            path = %self.path.display(),
            products = snapshot.len(),
            revision = snapshot.revision(),
            "catalog loaded"
        );
        Ok(snapshot)
    }
}
