//! # Core Domain Entities
//!
//! Defines the billing entities shared across all subsystems.
//!
//! ## Clusters
//!
//! - **Catalog**: `CatalogItem`, a purchasable product with a stock count
//! - **Invoice**: `CartLine` and `BillingState`, the in-progress bill
//! - **Rates**: discount/tax percentages with their clamping rules

use serde::Serialize;

/// A product identifier. Ten ASCII digits by convention; see
/// [`crate::product_id`] for the shape rules and migration policy.
pub type ProductId = String;

/// A monetary amount. Full `f64` precision is kept through every
/// intermediate computation; rounding happens only at presentation time
/// via [`round_display`].
pub type Money = f64;

/// Rounds a monetary amount to 2 decimal places for display.
///
/// Internal accumulation never goes through this function.
pub fn round_display(amount: Money) -> Money {
    (amount * 100.0).round() / 100.0
}

/// Default discount rate when none is stored (percent).
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.0;

/// Default tax rate when none is stored (percent).
///
/// 18 is a product decision (standard GST slab), not a generic
/// fallback-to-zero.
pub const DEFAULT_TAX_RATE: f64 = 18.0;

/// Clamps a discount/tax rate into the valid `[0, 100]` percent range.
///
/// Non-finite input falls back to `fallback`.
pub fn clamp_rate(rate: f64, fallback: f64) -> f64 {
    if !rate.is_finite() {
        return fallback;
    }
    rate.clamp(0.0, 100.0)
}

/// A purchasable product in the catalog.
///
/// INVARIANT: `stock` is never negative (`u32` makes this structural) and
/// the serialized `inStock` flag always equals `stock > 0`. The flag is
/// private: every mutation goes through [`CatalogItem::set_stock`] or
/// [`CatalogItem::saturating_adjust`], which recompute it. Loads never
/// trust a stored flag: the storage codec rebuilds items through
/// [`CatalogItem::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units currently available (not reserved by any cart line).
    stock: u32,
    /// Derived availability flag, kept for the legacy wire shape.
    in_stock: bool,
}

impl CatalogItem {
    /// Creates an item, deriving the availability flag from `stock`.
    pub fn new(id: ProductId, name: String, price: Money, stock: u32) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            in_stock: stock > 0,
        }
    }

    /// Units currently available.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Whether the item can currently be added to a cart.
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Replaces the stock count and recomputes the availability flag.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.in_stock = stock > 0;
    }

    /// Applies a signed stock delta, flooring at zero, and recomputes the
    /// availability flag. Returns the stock actually reached.
    pub fn saturating_adjust(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.stock).saturating_add(delta).max(0);
        // Stock counts live far below u32::MAX; the cast cannot truncate
        // for any value a billing session can produce.
        self.set_stock(next as u32);
        self.stock
    }
}

/// One line of the in-progress invoice.
///
/// Name and price are snapshots taken from the catalog at add time; later
/// catalog price edits do not retroactively change the line.
///
/// INVARIANT: `quantity >= 1`. A line that would drop to zero is removed,
/// never kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog reference. `None` only for lines restored from legacy
    /// records that predate identifiers.
    pub id: Option<ProductId>,
    /// Name snapshot at add time.
    pub name: String,
    /// Unit price snapshot at add time.
    pub price: Money,
    /// Units reserved by this line.
    pub quantity: u32,
}

impl CartLine {
    /// Total for this line (`quantity * price`), full precision.
    pub fn line_total(&self) -> Money {
        f64::from(self.quantity) * self.price
    }
}

/// The persisted bill: cart lines plus the two rate inputs.
///
/// Rebuilt wholesale from storage at startup and rewritten wholesale after
/// every mutation; there is no incremental persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingState {
    /// Invoice lines in insertion order.
    #[serde(rename = "products")]
    pub lines: Vec<CartLine>,
    /// Discount percent in `[0, 100]`.
    #[serde(rename = "discountRate")]
    pub discount_rate: f64,
    /// Tax percent in `[0, 100]`.
    #[serde(rename = "taxRate")]
    pub tax_rate: f64,
}

impl Default for BillingState {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            discount_rate: DEFAULT_DISCOUNT_RATE,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}
