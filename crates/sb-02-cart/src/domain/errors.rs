//! Cart Ledger error types.
//!
//! Validation errors block the mutation entirely: no partial stock
//! decrement, no partial line update.

use thiserror::Error;

/// Cart Ledger error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    /// Referenced catalog identifier is absent.
    #[error("Product not found in catalog: {id}")]
    NotFound { id: String },

    /// Stock is exactly zero at add time.
    #[error("Product is out of stock: {id}")]
    OutOfStock { id: String },

    /// Requested quantity is not a positive integer.
    #[error("Invalid quantity: {requested}")]
    InvalidQuantity { requested: i64 },

    /// Add would exceed the available pool. Carries the computed ceiling
    /// for caller messaging.
    #[error("Only {available} items available in stock (requested total {requested})")]
    InsufficientStock { requested: u32, available: u32 },

    /// Cart line index is invalid.
    #[error("Cart line index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}
