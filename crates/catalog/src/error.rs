use std::path::PathBuf;

use thiserror::Error;

use paintshop_core::{DomainError, ProductId};

/// Failure while obtaining a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("product {id} is invalid: {source}")]
    InvalidProduct {
        id: ProductId,
        #[source]
        source: DomainError,
    },

    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}
