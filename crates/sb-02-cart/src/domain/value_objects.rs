//! Value objects for the Cart Ledger subsystem.
//!
//! Receipt types returned by mutations so callers (renderer, CLI) can
//! report what actually happened without re-querying state.

use shared_types::CartLine;

/// Result of a successful `add_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddReceipt {
    /// The cart line after the add (created or incremented).
    pub line: CartLine,
    /// Catalog stock remaining after the allocation.
    pub remaining_stock: u32,
}

/// Warning attached to an edit that exceeded the available pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampWarning {
    /// Quantity the caller asked for.
    pub requested: u32,
    /// Ceiling the quantity was clamped to (free stock + old reservation).
    pub available: u32,
}

/// Result of a successful `edit_quantity`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditReceipt {
    /// The cart line after the edit.
    pub line: CartLine,
    /// Present when the requested quantity was clamped to the available
    /// pool (edit clamps where add rejects).
    pub clamped: Option<ClampWarning>,
}

/// Result of `clear`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClearReceipt {
    /// Lines whose quantity was restored to catalog stock.
    pub restored: usize,
    /// Lines whose catalog item no longer exists: their reservation is
    /// dropped, not restored. Known data-loss edge case, preserved from
    /// the legacy behavior.
    pub dropped: Vec<CartLine>,
}
