//! # Cart Ledger
//!
//! The invoice line collection plus the two rate inputs, with stock
//! reconciliation against the catalog on every mutation.
//!
//! Validation completes before any state is touched: a failed operation
//! leaves both the cart and the catalog exactly as they were.

use super::errors::CartError;
use super::value_objects::{AddReceipt, ClampWarning, ClearReceipt, EditReceipt};
use crate::ports::StockProvider;
use shared_types::{
    clamp_rate, BillingState, CartLine, DEFAULT_DISCOUNT_RATE, DEFAULT_TAX_RATE,
};
use tracing::warn;

/// The in-progress invoice.
///
/// INVARIANTS:
/// - Line order is insertion order (display order)
/// - Every line quantity is ≥ 1
/// - `stock + Σ(line quantities for an item)` is conserved by every
///   operation that touches that item
#[derive(Debug, Clone)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    discount_rate: f64,
    tax_rate: f64,
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CartLedger {
    /// Creates an empty cart with default rates (discount 0, tax 18).
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            discount_rate: DEFAULT_DISCOUNT_RATE,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    /// Rebuilds the ledger from a persisted billing state.
    ///
    /// Rates are re-clamped defensively; line validation happened in the
    /// storage codec.
    pub fn from_state(state: BillingState) -> Self {
        Self {
            lines: state.lines,
            discount_rate: clamp_rate(state.discount_rate, DEFAULT_DISCOUNT_RATE),
            tax_rate: clamp_rate(state.tax_rate, DEFAULT_TAX_RATE),
        }
    }

    /// Snapshot of the full billing state for persistence.
    pub fn billing_state(&self) -> BillingState {
        BillingState {
            lines: self.lines.clone(),
            discount_rate: self.discount_rate,
            tax_rate: self.tax_rate,
        }
    }

    /// Invoice lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of invoice lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current discount percent.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Current tax percent.
    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Sets the discount percent, clamped to `[0, 100]` (non-finite → 0).
    pub fn set_discount_rate(&mut self, rate: f64) {
        self.discount_rate = clamp_rate(rate, 0.0);
    }

    /// Sets the tax percent, clamped to `[0, 100]` (non-finite → 0).
    pub fn set_tax_rate(&mut self, rate: f64) {
        self.tax_rate = clamp_rate(rate, 0.0);
    }

    /// Case-insensitive substring filter on line name only.
    ///
    /// Non-destructive; insertion order preserved.
    pub fn filter(&self, query: &str) -> Vec<&CartLine> {
        let query = query.trim().to_lowercase();
        self.lines
            .iter()
            .filter(|line| query.is_empty() || line.name.to_lowercase().contains(&query))
            .collect()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.id.as_deref() == Some(id))
    }

    /// Adds `requested` units of a catalog item to the cart.
    ///
    /// The available pool is free catalog stock plus whatever this cart
    /// already holds for the item, since growing the same line is a
    /// reallocation, not new consumption. A request that exceeds the pool
    /// is rejected, never clamped (contrast with [`Self::edit_quantity`]).
    ///
    /// # Errors
    /// - `NotFound`: identifier absent from the catalog
    /// - `OutOfStock`: stock is exactly zero
    /// - `InvalidQuantity`: requested ≤ 0
    /// - `InsufficientStock`: total would exceed the pool (carries the ceiling)
    pub fn add_item(
        &mut self,
        stock: &mut dyn StockProvider,
        id: &str,
        requested: i64,
    ) -> Result<AddReceipt, CartError> {
        let item = stock.item(id).ok_or_else(|| CartError::NotFound {
            id: id.to_string(),
        })?;

        if item.stock() == 0 {
            return Err(CartError::OutOfStock { id: id.to_string() });
        }
        if requested <= 0 {
            return Err(CartError::InvalidQuantity { requested });
        }
        // Saturate oversized requests; they fail the pool check below.
        let requested = u32::try_from(requested).unwrap_or(u32::MAX);

        let existing = self.position_of(id);
        let current = existing.map(|i| self.lines[i].quantity).unwrap_or(0);
        let available = item.stock().saturating_add(current);
        let total = current.saturating_add(requested);

        if total > available {
            return Err(CartError::InsufficientStock {
                requested: total,
                available,
            });
        }

        // Validation done; consume stock first so a provider failure
        // cannot leave a line without its reservation.
        let remaining = stock.adjust_stock(id, -i64::from(requested))?;

        let line = match existing {
            Some(index) => {
                self.lines[index].quantity = total;
                self.lines[index].clone()
            }
            None => {
                let line = CartLine {
                    id: Some(item.id.clone()),
                    name: item.name.clone(),
                    price: item.price,
                    quantity: requested,
                };
                self.lines.push(line.clone());
                line
            }
        };

        Ok(AddReceipt {
            line,
            remaining_stock: remaining,
        })
    }

    /// Sets a line's quantity, reconciling catalog stock by the delta.
    ///
    /// A request above the available pool is clamped to the pool and the
    /// clamp is surfaced in the receipt (contrast with [`Self::add_item`],
    /// which rejects). A line whose catalog item no longer exists has its
    /// quantity set directly with no stock reconciliation.
    ///
    /// # Errors
    /// - `OutOfRange`: index invalid
    /// - `InvalidQuantity`: requested ≤ 0 (zero never deletes via this path)
    pub fn edit_quantity(
        &mut self,
        stock: &mut dyn StockProvider,
        index: usize,
        requested: i64,
    ) -> Result<EditReceipt, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::OutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        if requested <= 0 {
            return Err(CartError::InvalidQuantity { requested });
        }
        let mut quantity = u32::try_from(requested).unwrap_or(u32::MAX);
        let old = self.lines[index].quantity;
        let mut clamped = None;

        if let Some(id) = self.lines[index].id.clone() {
            if let Some(item) = stock.item(&id) {
                let available = item.stock().saturating_add(old);
                if quantity > available {
                    clamped = Some(ClampWarning {
                        requested: quantity,
                        available,
                    });
                    quantity = available;
                }
                let diff = i64::from(quantity) - i64::from(old);
                stock.adjust_stock(&id, -diff)?;
            }
            // Item gone from the catalog: the quantity still changes, but
            // there is no stock to reconcile against.
        }

        self.lines[index].quantity = quantity;
        Ok(EditReceipt {
            line: self.lines[index].clone(),
            clamped,
        })
    }

    /// Deletes a line, restoring its quantity to catalog stock.
    ///
    /// The restore is unconditional: there is no ceiling above which it
    /// is refused. If the catalog item no longer exists the reservation is
    /// dropped with a warning.
    pub fn remove_line(
        &mut self,
        stock: &mut dyn StockProvider,
        index: usize,
    ) -> Result<CartLine, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::OutOfRange {
                index,
                len: self.lines.len(),
            });
        }

        let line = self.lines.remove(index);
        if let Some(id) = &line.id {
            if stock.adjust_stock(id, i64::from(line.quantity)).is_err() {
                warn!(id = %id, quantity = line.quantity, "catalog item gone, reservation dropped");
            }
        }
        Ok(line)
    }

    /// Empties the cart, restoring every line's quantity to its catalog
    /// item, and resets the rates (discount 0, tax 18).
    ///
    /// Lines whose catalog item was deleted while still in the cart lose
    /// their reservation; the quantity is dropped, not restored anywhere.
    pub fn clear(&mut self, stock: &mut dyn StockProvider) -> ClearReceipt {
        let mut receipt = ClearReceipt::default();

        for line in self.lines.drain(..) {
            let restored = match &line.id {
                Some(id) => stock.adjust_stock(id, i64::from(line.quantity)).is_ok(),
                None => false,
            };
            if restored {
                receipt.restored += 1;
            } else {
                warn!(name = %line.name, quantity = line.quantity, "catalog item gone, reservation dropped");
                receipt.dropped.push(line);
            }
        }

        self.discount_rate = DEFAULT_DISCOUNT_RATE;
        self.tax_rate = DEFAULT_TAX_RATE;
        receipt
    }
}
