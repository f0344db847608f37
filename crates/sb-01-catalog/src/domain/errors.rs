//! Catalog error types.

use shared_types::ProductId;
use thiserror::Error;

/// Catalog Store error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Referenced product identifier is not in the catalog.
    #[error("Product not found: {id}")]
    NotFound { id: ProductId },

    /// Insert attempted with an identifier that already exists.
    #[error("Product identifier already exists: {id}")]
    DuplicateIdentifier { id: ProductId },

    /// Insert attempted with an empty identifier.
    #[error("Product identifier must not be empty")]
    EmptyIdentifier,

    /// Insert attempted with an empty name.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Insert attempted with a negative price.
    #[error("Product price must not be negative: {price}")]
    NegativePrice { price: f64 },

    /// Persistence source failure (load or save).
    #[error("Catalog source error: {0}")]
    Source(String),
}
